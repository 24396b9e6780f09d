//! Per-problem state of the "explain" panel.

use std::collections::HashMap;

/// Identity of one problem across categories.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExplainKey {
    category: String,
    problem: String,
}

impl ExplainKey {
    #[must_use]
    pub fn new(category: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            problem: problem.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn problem(&self) -> &str {
        &self.problem
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExplainPhase {
    #[default]
    Hidden,
    Loading,
    Shown,
}

/// What the caller must do after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplainAction {
    /// Issue one request; call [`ExplanationBoard::complete`] when it resolves.
    Fetch,
    /// A cached explanation exists; visibility flipped, nothing to fetch.
    Toggled,
    /// A request for this key is already in flight.
    Ignored,
}

/// Tracks explain-panel phases keyed by problem.
///
/// Cached texts live on the problem itself; this only tracks visibility and
/// in-flight requests. Keys are independent of each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplanationBoard {
    phases: HashMap<ExplainKey, ExplainPhase>,
}

impl ExplanationBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self, key: &ExplainKey) -> ExplainPhase {
        self.phases.get(key).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_loading(&self, key: &ExplainKey) -> bool {
        self.phase(key) == ExplainPhase::Loading
    }

    #[must_use]
    pub fn is_visible(&self, key: &ExplainKey) -> bool {
        self.phase(key) != ExplainPhase::Hidden
    }

    /// Number of requests currently in flight.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.phases
            .values()
            .filter(|phase| **phase == ExplainPhase::Loading)
            .count()
    }

    /// Apply an explain click for `key`.
    pub fn click(&mut self, key: &ExplainKey, has_cached: bool) -> ExplainAction {
        let current = self.phase(key);
        if current == ExplainPhase::Loading {
            return ExplainAction::Ignored;
        }
        if has_cached {
            let next = match current {
                ExplainPhase::Shown => ExplainPhase::Hidden,
                _ => ExplainPhase::Shown,
            };
            self.phases.insert(key.clone(), next);
            return ExplainAction::Toggled;
        }
        self.phases.insert(key.clone(), ExplainPhase::Loading);
        ExplainAction::Fetch
    }

    /// Mark the request for `key` resolved; the result is shown.
    pub fn complete(&mut self, key: &ExplainKey) {
        self.phases.insert(key.clone(), ExplainPhase::Shown);
    }
}
