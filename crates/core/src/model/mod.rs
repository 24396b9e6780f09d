mod category;
mod difficulty;
mod problem;
mod profile;

pub use category::Category;
pub use difficulty::{Difficulty, DifficultyFilter, ParseDifficultyError};
pub use problem::Problem;
pub use profile::ProfileUrl;
