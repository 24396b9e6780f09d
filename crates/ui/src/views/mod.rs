mod charts;
mod dashboard;
mod hard_list;
mod problem_list;
mod profile;
mod sidebar;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use state::{ViewError, ViewState, view_state_from_resource};
