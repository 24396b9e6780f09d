use crate::model::{Category, DifficultyFilter, Problem};
use crate::snapshot::{self, Snapshot};

/// Canonical in-memory progress state.
///
/// Owns every category with its completion and explanation values plus the
/// transient navigation state. All mutation goes through methods; callers
/// persist the result of [`ProgressStore::snapshot`] after each change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStore {
    categories: Vec<Category>,
    active_category: String,
    active_filter: DifficultyFilter,
}

impl ProgressStore {
    /// Build a store over merged categories; the first category starts active.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        let active_category = categories
            .first()
            .map(|category| category.name().to_string())
            .unwrap_or_default();
        Self {
            categories,
            active_category,
            active_filter: DifficultyFilter::All,
        }
    }

    /// Merge persisted progress into the catalog and build a store.
    #[must_use]
    pub fn from_snapshot(catalog: Vec<Category>, persisted: &Snapshot) -> Self {
        Self::new(snapshot::merge(catalog, persisted))
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        snapshot::capture(&self.categories)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn active_category_name(&self) -> &str {
        &self.active_category
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&Category> {
        self.category(&self.active_category)
    }

    #[must_use]
    pub fn active_filter(&self) -> DifficultyFilter {
        self.active_filter
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name() == name)
    }

    /// Make `name` the active category and reset the filter to `All`.
    pub fn select_category(&mut self, name: impl Into<String>) {
        self.active_category = name.into();
        self.active_filter = DifficultyFilter::All;
    }

    pub fn set_filter(&mut self, filter: DifficultyFilter) {
        self.active_filter = filter;
    }

    /// Active-category problems under the active filter, in declaration order.
    #[must_use]
    pub fn visible_problems(&self) -> Vec<&Problem> {
        self.active_category()
            .map(|category| category.filtered(self.active_filter).collect())
            .unwrap_or_default()
    }

    /// Set `completed` on one problem of the active category.
    ///
    /// Only the active category is searched. Returns `false` without
    /// changing anything when either name does not match.
    pub fn toggle_completion(&mut self, category_name: &str, problem_name: &str, completed: bool) -> bool {
        if category_name != self.active_category {
            return false;
        }
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.name() == category_name)
        else {
            return false;
        };
        match category.problem_mut(problem_name) {
            Some(problem) => {
                problem.set_completed(completed);
                true
            }
            None => false,
        }
    }

    /// Cache an explanation (or an explanation error text) on a problem.
    ///
    /// Returns `false` when the problem does not exist.
    pub fn set_explanation(
        &mut self,
        category_name: &str,
        problem_name: &str,
        explanation: impl Into<String>,
    ) -> bool {
        let problem = self
            .categories
            .iter_mut()
            .find(|category| category.name() == category_name)
            .and_then(|category| category.problem_mut(problem_name));
        match problem {
            Some(problem) => {
                problem.set_explanation(explanation);
                true
            }
            None => false,
        }
    }
}
