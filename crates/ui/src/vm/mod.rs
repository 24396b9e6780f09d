mod category_vm;
mod donut_vm;
mod markdown_vm;
mod problem_vm;

pub use category_vm::{CategoryNavVm, map_category_nav};
pub use donut_vm::{
    DonutSegmentVm, DonutVm, LegendItemVm, difficulty_donut, overall_donut,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use problem_vm::{HardProblemVm, ProblemRowVm, map_hard_problems, map_problem_rows, tag_class};
