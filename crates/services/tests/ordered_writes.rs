use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dsa_core::catalog::{self, SeedCategory};
use dsa_core::model::Difficulty;
use dsa_core::progress::ProgressStore;
use services::{ProfileService, ProgressService};
use storage::repository::{InMemoryRepository, SlotRepository, StorageError};
use storage::{JsonSlots, PROFILE_SLOT, PROGRESS_SLOT};

static SEED: &[SeedCategory] = &[SeedCategory {
    name: "Arrays",
    icon: "A",
    problems: &[("Two Sum", Difficulty::Easy), ("3Sum", Difficulty::Medium)],
    hard_list: &[],
}];

/// The first write stalls so a later write would overtake it without ordering.
#[derive(Clone, Default)]
struct StallFirstWrite {
    inner: InMemoryRepository,
    writes: Arc<AtomicUsize>,
}

#[async_trait]
impl SlotRepository for StallFirstWrite {
    async fn get_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_slot(key).await
    }

    async fn put_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.writes.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        self.inner.put_slot(key, value).await
    }
}

fn completed(raw: &str) -> Vec<String> {
    let snapshot: serde_json::Value = serde_json::from_str(raw).expect("snapshot json");
    snapshot[0]["problems"]
        .as_array()
        .expect("problems")
        .iter()
        .filter(|problem| problem["completed"] == true)
        .filter_map(|problem| problem["name"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn progress_writes_land_in_call_order() {
    let repo = StallFirstWrite::default();
    let service = ProgressService::with_catalog(
        JsonSlots::new(Arc::new(repo.clone())),
        catalog::from_seed(SEED),
    );

    let mut store = ProgressStore::new(catalog::from_seed(SEED));
    store.toggle_completion("Arrays", "Two Sum", true);
    let first = store.clone();
    store.toggle_completion("Arrays", "3Sum", true);
    let second = store.clone();

    tokio::join!(service.save(&first), service.save(&second));

    let raw = repo.inner.get_slot(PROGRESS_SLOT).await.unwrap().expect("saved");
    assert_eq!(completed(&raw), vec!["Two Sum", "3Sum"]);
}

#[tokio::test]
async fn save_latest_reads_state_under_the_lock() {
    let repo = StallFirstWrite::default();
    let service = ProgressService::with_catalog(
        JsonSlots::new(Arc::new(repo.clone())),
        catalog::from_seed(SEED),
    );
    let state = Arc::new(Mutex::new(ProgressStore::new(catalog::from_seed(SEED))));

    state.lock().unwrap().toggle_completion("Arrays", "Two Sum", true);
    let first = service.save_latest(|| state.lock().unwrap().clone());
    let second = async {
        state.lock().unwrap().toggle_completion("Arrays", "3Sum", true);
        service.save_latest(|| state.lock().unwrap().clone()).await;
    };
    tokio::join!(first, second);

    let raw = repo.inner.get_slot(PROGRESS_SLOT).await.unwrap().expect("saved");
    assert_eq!(completed(&raw), vec!["Two Sum", "3Sum"]);
}

#[tokio::test]
async fn profile_writes_land_in_call_order() {
    let repo = StallFirstWrite::default();
    let service = ProfileService::new(JsonSlots::new(Arc::new(repo.clone())));

    tokio::join!(
        service.save("https://leetcode.com/u/old/"),
        service.save("https://leetcode.com/u/new/"),
    );

    assert_eq!(
        repo.inner.get_slot(PROFILE_SLOT).await.unwrap().as_deref(),
        Some("\"https://leetcode.com/u/new/\"")
    );
    assert_eq!(service.load().await.as_str(), "https://leetcode.com/u/new/");
}
