#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod explain;
pub mod model;
pub mod progress;
pub mod slug;
pub mod snapshot;
pub mod stats;

pub use error::Error;
pub use progress::ProgressStore;
