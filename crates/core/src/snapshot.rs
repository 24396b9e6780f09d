//! Persisted progress shape and the load-time merge with the catalog.
//!
//! Field names match the stored JSON (`category`, `hardList`, `leetCodeUrl`).
//! Only category/problem names, `completed` and `explanation` are read back;
//! everything else in a stored value is ignored.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Problem};

/// Full persisted progress: every category in catalog order.
pub type Snapshot = Vec<SnapshotCategory>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCategory {
    #[serde(rename = "category")]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub problems: Vec<SnapshotProblem>,
    #[serde(default, rename = "hardList")]
    pub hard_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotProblem {
    pub name: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, rename = "leetCodeUrl", skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl SnapshotCategory {
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name().to_string(),
            icon: Some(category.icon().to_string()),
            problems: category
                .problems()
                .iter()
                .map(SnapshotProblem::from_problem)
                .collect(),
            hard_list: category.hard_list().to_vec(),
        }
    }

    fn problem(&self, name: &str) -> Option<&SnapshotProblem> {
        self.problems.iter().find(|problem| problem.name == name)
    }
}

impl SnapshotProblem {
    #[must_use]
    pub fn from_problem(problem: &Problem) -> Self {
        Self {
            name: problem.name().to_string(),
            difficulty: Some(problem.difficulty().as_str().to_string()),
            completed: Some(problem.completed()),
            explanation: problem.explanation().map(str::to_owned),
            external_url: Some(problem.external_url().to_string()),
        }
    }
}

/// Capture the current state of every category for persistence.
#[must_use]
pub fn capture(categories: &[Category]) -> Snapshot {
    categories.iter().map(SnapshotCategory::from_category).collect()
}

/// Overlay persisted progress onto fresh catalog categories.
///
/// Matching is by `(category name, problem name)`. Catalog entries with no
/// persisted match stay uncompleted with no explanation; persisted entries
/// with no catalog match are dropped. Links are always re-derived.
#[must_use]
pub fn merge(catalog: Vec<Category>, persisted: &[SnapshotCategory]) -> Vec<Category> {
    catalog
        .into_iter()
        .map(|category| {
            let saved = persisted.iter().find(|saved| saved.name == category.name());
            let problems = category
                .problems()
                .iter()
                .map(|problem| {
                    let fresh = Problem::new(problem.name(), problem.difficulty());
                    match saved.and_then(|saved| saved.problem(problem.name())) {
                        Some(saved) => fresh.with_progress(
                            saved.completed.unwrap_or(false),
                            saved.explanation.clone(),
                        ),
                        None => fresh,
                    }
                })
                .collect();
            Category::new(
                category.name(),
                category.icon(),
                problems,
                category.hard_list().to_vec(),
            )
        })
        .collect()
}
