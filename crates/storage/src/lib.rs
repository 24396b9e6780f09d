#![forbid(unsafe_code)]

pub mod json;
pub mod repository;
pub mod sqlite;

pub use json::JsonSlots;
pub use repository::{InMemoryRepository, SlotRepository, Storage, StorageError};

/// Slot holding the full progress snapshot.
pub const PROGRESS_SLOT: &str = "progressSnapshot";

/// Slot holding the saved profile link.
pub const PROFILE_SLOT: &str = "profileUrl";
