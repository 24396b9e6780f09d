use std::sync::Arc;

use dsa_core::catalog;
use dsa_core::model::Category;
use dsa_core::progress::ProgressStore;
use dsa_core::snapshot::Snapshot;
use dsa_core::stats::OverallProgress;
use storage::{JsonSlots, PROGRESS_SLOT};
use tokio::sync::Mutex;

/// Loads and persists the progress snapshot for a fixed catalog.
///
/// Writes are serialized: one finishes before the next starts.
#[derive(Clone)]
pub struct ProgressService {
    slots: JsonSlots,
    catalog: Vec<Category>,
    write_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    /// Service over the built-in catalog.
    #[must_use]
    pub fn new(slots: JsonSlots) -> Self {
        Self::with_catalog(slots, catalog::seed())
    }

    #[must_use]
    pub fn with_catalog(slots: JsonSlots, catalog: Vec<Category>) -> Self {
        Self {
            slots,
            catalog,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Merge the persisted snapshot (if any) into a fresh catalog.
    pub async fn load(&self) -> ProgressStore {
        let persisted: Snapshot = self.slots.read(PROGRESS_SLOT, Snapshot::new()).await;
        let store = ProgressStore::from_snapshot(self.catalog.clone(), &persisted);
        let overall = OverallProgress::from_categories(store.categories());
        tracing::info!(
            categories = store.categories().len(),
            problems = overall.total,
            completed = overall.completed,
            "progress loaded"
        );
        store
    }

    /// Persist the full snapshot. Failures are logged by the slot layer.
    pub async fn save(&self, store: &ProgressStore) {
        let _guard = self.write_lock.lock().await;
        self.write(store).await;
    }

    /// Persist whatever `current` returns once the write lock is held.
    ///
    /// Concurrent callers can finish in any order; the last write still
    /// carries the newest state.
    pub async fn save_latest(&self, current: impl FnOnce() -> ProgressStore) {
        let _guard = self.write_lock.lock().await;
        let store = current();
        self.write(&store).await;
    }

    async fn write(&self, store: &ProgressStore) {
        if store.categories().is_empty() {
            return;
        }
        self.slots.write(PROGRESS_SLOT, &store.snapshot()).await;
    }
}
