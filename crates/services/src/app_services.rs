use std::sync::Arc;

use storage::{JsonSlots, Storage};

use crate::error::AppServicesError;
use crate::explanation_service::ExplanationService;
use crate::profile_service::ProfileService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    profile: Arc<ProfileService>,
    explanations: Arc<ExplanationService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        explanations: ExplanationService,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, explanations))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, explanations: ExplanationService) -> Self {
        let slots = JsonSlots::new(Arc::clone(&storage.slots));
        Self {
            progress: Arc::new(ProgressService::new(slots.clone())),
            profile: Arc::new(ProfileService::new(slots)),
            explanations: Arc::new(explanations),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn explanations(&self) -> Arc<ExplanationService> {
        Arc::clone(&self.explanations)
    }
}
