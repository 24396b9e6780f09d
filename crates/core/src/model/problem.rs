use crate::model::Difficulty;
use crate::slug::problem_url;

/// A practice problem with the user's progress overlaid.
///
/// `external_url` is always derived from the name and is never read back
/// from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    name: String,
    difficulty: Difficulty,
    completed: bool,
    external_url: String,
    explanation: Option<String>,
}

impl Problem {
    /// Create a fresh, uncompleted problem.
    #[must_use]
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        let name = name.into();
        let external_url = problem_url(&name);
        Self {
            name,
            difficulty,
            completed: false,
            external_url,
            explanation: None,
        }
    }

    /// Overlay persisted progress onto a problem.
    #[must_use]
    pub fn with_progress(mut self, completed: bool, explanation: Option<String>) -> Self {
        self.completed = completed;
        self.explanation = explanation;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn external_url(&self) -> &str {
        &self.external_url
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn set_explanation(&mut self, explanation: impl Into<String>) {
        self.explanation = Some(explanation.into());
    }
}
