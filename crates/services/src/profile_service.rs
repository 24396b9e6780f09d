use std::sync::Arc;

use dsa_core::model::ProfileUrl;
use storage::{JsonSlots, PROFILE_SLOT};
use tokio::sync::Mutex;

/// Persists the saved profile link in its own slot. Writes are serialized.
#[derive(Clone)]
pub struct ProfileService {
    slots: JsonSlots,
    write_lock: Arc<Mutex<()>>,
}

impl ProfileService {
    #[must_use]
    pub fn new(slots: JsonSlots) -> Self {
        Self {
            slots,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the saved link; empty when nothing was saved.
    pub async fn load(&self) -> ProfileUrl {
        let raw: String = self.slots.read(PROFILE_SLOT, String::new()).await;
        ProfileUrl::new(raw)
    }

    /// Trim and persist `raw` unconditionally.
    pub async fn save(&self, raw: &str) -> ProfileUrl {
        let _guard = self.write_lock.lock().await;
        self.write(raw).await
    }

    /// Persist whatever `current` returns once the write lock is held.
    pub async fn save_latest(&self, current: impl FnOnce() -> String) -> ProfileUrl {
        let _guard = self.write_lock.lock().await;
        let raw = current();
        self.write(&raw).await
    }

    async fn write(&self, raw: &str) -> ProfileUrl {
        let url = ProfileUrl::new(raw);
        tracing::debug!(empty = url.is_empty(), "saving profile link");
        self.slots.write(PROFILE_SLOT, url.as_str()).await;
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::{InMemoryRepository, SlotRepository};

    #[tokio::test]
    async fn save_trims_and_persists() {
        let repo = InMemoryRepository::new();
        let service = ProfileService::new(JsonSlots::new(Arc::new(repo.clone())));

        let saved = service.save("  https://leetcode.com/u/me/  ").await;
        assert_eq!(saved.as_str(), "https://leetcode.com/u/me/");
        assert_eq!(
            repo.get_slot(PROFILE_SLOT).await.unwrap().as_deref(),
            Some("\"https://leetcode.com/u/me/\"")
        );
        assert_eq!(service.load().await, saved);
    }

    #[tokio::test]
    async fn blank_save_clears_profile() {
        let repo = InMemoryRepository::new();
        let service = ProfileService::new(JsonSlots::new(Arc::new(repo.clone())));
        service.save("https://leetcode.com/u/me/").await;
        let saved = service.save("   ").await;
        assert!(saved.is_empty());
        assert_eq!(repo.get_slot(PROFILE_SLOT).await.unwrap().as_deref(), Some("\"\""));
        assert!(service.load().await.link().is_none());
    }
}
