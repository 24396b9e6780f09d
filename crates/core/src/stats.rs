//! Read-only projections behind the progress charts.

use crate::model::{Category, Difficulty};

/// Completion totals across every category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverallProgress {
    pub total: usize,
    pub completed: usize,
}

impl OverallProgress {
    #[must_use]
    pub fn from_categories(categories: &[Category]) -> Self {
        categories
            .iter()
            .fold(Self::default(), |acc, category| Self {
                total: acc.total + category.problems().len(),
                completed: acc.completed + category.completed_count(),
            })
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Completion percentage rounded to one decimal; `0.0` when there are no problems.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.completed as f64 / self.total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    /// Percentage as shown in the chart title: `0` for an empty catalog, else one decimal.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        if self.total == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.percentage())
        }
    }
}

/// Per-difficulty problem counts for one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DifficultyCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyCounts {
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        let mut counts = Self::default();
        for problem in category.problems() {
            match problem.difficulty() {
                Difficulty::Easy => counts.easy += 1,
                Difficulty::Medium => counts.medium += 1,
                Difficulty::Hard => counts.hard += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Problem;

    fn category(name: &str, done: usize, total: usize) -> Category {
        let problems = (0..total)
            .map(|i| Problem::new(format!("{name} {i}"), Difficulty::Easy).with_progress(i < done, None))
            .collect();
        Category::new(name, "?", problems, Vec::new())
    }

    #[test]
    fn empty_catalog_is_zero_percent() {
        let progress = OverallProgress::from_categories(&[]);
        assert_eq!(progress, OverallProgress { total: 0, completed: 0 });
        assert!(progress.percentage().abs() < f64::EPSILON);
        assert!(!progress.percentage().is_nan());
        assert_eq!(progress.percentage_label(), "0");
    }

    #[test]
    fn three_of_ten_is_thirty_percent() {
        let progress = OverallProgress::from_categories(&[category("A", 2, 6), category("B", 1, 4)]);
        assert_eq!(progress.total, 10);
        assert_eq!(progress.completed, 3);
        assert_eq!(progress.remaining(), 7);
        assert!((progress.percentage() - 30.0).abs() < f64::EPSILON);
        assert_eq!(progress.percentage_label(), "30.0");
    }

    #[test]
    fn rounds_to_one_decimal() {
        let progress = OverallProgress { total: 3, completed: 1 };
        assert!((progress.percentage() - 33.3).abs() < 1e-9);
        assert_eq!(progress.percentage_label(), "33.3");
        let progress = OverallProgress { total: 3, completed: 2 };
        assert_eq!(progress.percentage_label(), "66.7");
    }

    #[test]
    fn counts_difficulties_with_zero_defaults() {
        let category = Category::new(
            "Mixed",
            "?",
            vec![
                Problem::new("a", Difficulty::Easy),
                Problem::new("b", Difficulty::Hard),
                Problem::new("c", Difficulty::Easy),
            ],
            Vec::new(),
        );
        let counts = DifficultyCounts::from_category(&category);
        assert_eq!(counts, DifficultyCounts { easy: 2, medium: 0, hard: 1 });
        assert_eq!(counts.get(Difficulty::Medium), 0);
        assert_eq!(counts.total(), 3);
    }
}
