use dsa_core::explain::{ExplainKey, ExplainPhase, ExplanationBoard};
use dsa_core::model::{Category, Difficulty, DifficultyFilter};

use crate::vm::markdown_vm::markdown_to_html;

/// CSS class for a difficulty tag.
#[must_use]
pub fn tag_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "tag tag-easy",
        Difficulty::Medium => "tag tag-medium",
        Difficulty::Hard => "tag tag-hard",
    }
}

/// One row of the filtered problem list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRowVm {
    pub name: String,
    pub difficulty: &'static str,
    pub tag_class: &'static str,
    pub url: String,
    pub completed: bool,
    pub loading: bool,
    pub visible: bool,
    /// Sanitized explanation HTML, if one is cached.
    pub explanation_html: Option<String>,
}

#[must_use]
pub fn map_problem_rows(
    category: &Category,
    filter: DifficultyFilter,
    board: &ExplanationBoard,
) -> Vec<ProblemRowVm> {
    category
        .filtered(filter)
        .map(|problem| {
            let key = ExplainKey::new(category.name(), problem.name());
            let phase = board.phase(&key);
            ProblemRowVm {
                name: problem.name().to_string(),
                difficulty: problem.difficulty().as_str(),
                tag_class: tag_class(problem.difficulty()),
                url: problem.external_url().to_string(),
                completed: problem.completed(),
                loading: phase == ExplainPhase::Loading,
                visible: phase != ExplainPhase::Hidden,
                explanation_html: problem.explanation().map(markdown_to_html),
            }
        })
        .collect()
}

/// One row of the curated hard list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HardProblemVm {
    pub name: String,
    pub difficulty: &'static str,
    pub tag_class: &'static str,
    pub url: String,
}

#[must_use]
pub fn map_hard_problems(category: &Category) -> Vec<HardProblemVm> {
    category
        .hard_problems()
        .map(|problem| HardProblemVm {
            name: problem.name().to_string(),
            difficulty: problem.difficulty().as_str(),
            tag_class: tag_class(problem.difficulty()),
            url: problem.external_url().to_string(),
        })
        .collect()
}
