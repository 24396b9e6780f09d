//! JSON persistence over named slots.
//!
//! Reads never fail: an absent, blank, unreadable or undecodable slot yields
//! the caller's default. Writes never fail either: errors are logged and the
//! caller's in-memory value stays authoritative.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::{SlotRepository, StorageError};

#[derive(Clone)]
pub struct JsonSlots {
    repo: Arc<dyn SlotRepository>,
}

impl JsonSlots {
    #[must_use]
    pub fn new(repo: Arc<dyn SlotRepository>) -> Self {
        Self { repo }
    }

    /// Decode the slot `key`, or return `default`.
    pub async fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.repo.get_slot(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                tracing::warn!(key, error = %err, "slot read failed; using default");
                return default;
            }
        };
        if raw.trim().is_empty() {
            return default;
        }
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "slot decode failed; using default");
                default
            }
        }
    }

    /// Encode `value` into the slot `key`. Failures are logged and ignored.
    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_write(key, value).await {
            tracing::warn!(key, error = %err, "slot write failed");
        }
    }

    async fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(value).map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.repo.put_slot(key, &encoded).await
    }
}
