use crate::model::{DifficultyFilter, Problem};

/// A named group of problems with an optional curated hard list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    icon: String,
    problems: Vec<Problem>,
    hard_list: Vec<String>,
}

impl Category {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        problems: Vec<Problem>,
        hard_list: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            problems,
            hard_list,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    #[must_use]
    pub fn hard_list(&self) -> &[String] {
        &self.hard_list
    }

    #[must_use]
    pub fn problem(&self, name: &str) -> Option<&Problem> {
        self.problems.iter().find(|problem| problem.name() == name)
    }

    pub fn problem_mut(&mut self, name: &str) -> Option<&mut Problem> {
        self.problems.iter_mut().find(|problem| problem.name() == name)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.problems.iter().filter(|problem| problem.completed()).count()
    }

    /// Problems matching the filter, in declaration order.
    pub fn filtered(&self, filter: DifficultyFilter) -> impl Iterator<Item = &Problem> {
        self.problems
            .iter()
            .filter(move |problem| filter.matches(problem.difficulty()))
    }

    /// Problems named in the hard list, in hard-list order.
    ///
    /// Names without a matching problem are skipped.
    pub fn hard_problems(&self) -> impl Iterator<Item = &Problem> {
        self.hard_list.iter().filter_map(|name| self.problem(name))
    }
}
