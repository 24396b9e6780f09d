use std::sync::Arc;

use services::{ExplanationService, ProfileService, ProgressService};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;
    fn profile(&self) -> Arc<ProfileService>;
    fn explanations(&self) -> Arc<ExplanationService>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
    profile: Arc<ProfileService>,
    explanations: Arc<ExplanationService>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            profile: app.profile(),
            explanations: app.explanations(),
            link_opener: app.link_opener(),
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

    pub fn open_link(&self, url: &str) {
        self.link_opener.open_url(url);
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
