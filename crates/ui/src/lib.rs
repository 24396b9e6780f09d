pub mod app;
pub mod context;
pub mod platform;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, UiApp};
