use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dsa_core::ProgressStore;
use dsa_core::model::{Category, Difficulty, Problem};
use services::{
    ExplanationError, ExplanationService, ProfileService, ProgressService, TextGenerator,
};
use storage::repository::{InMemoryRepository, SlotRepository};
use storage::{JsonSlots, PROFILE_SLOT, PROGRESS_SLOT};

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::DashboardView;
use crate::views::dashboard::{DashboardActions, DashboardTestHandles};

pub struct FakeGenerator {
    reply: String,
    calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, ExplanationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

struct NoopLinkOpener;

impl UiLinkOpener for NoopLinkOpener {
    fn open_url(&self, _url: &str) {}
}

#[derive(Clone)]
struct TestApp {
    progress: Arc<ProgressService>,
    profile: Arc<ProfileService>,
    explanations: Arc<ExplanationService>,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    fn explanations(&self) -> Arc<ExplanationService> {
        Arc::clone(&self.explanations)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopLinkOpener)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: DashboardTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn DashboardHarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { DashboardView {} }
}

/// Two small categories so assertions stay readable.
pub fn test_catalog() -> Vec<Category> {
    vec![
        Category::new(
            "Arrays & Hashing",
            "🧮",
            vec![
                Problem::new("Two Sum", Difficulty::Easy),
                Problem::new("Group Anagrams", Difficulty::Medium),
            ],
            Vec::new(),
        ),
        Category::new(
            "Stack",
            "📚",
            vec![
                Problem::new("Valid Parentheses", Difficulty::Easy),
                Problem::new("Largest Rectangle in Histogram", Difficulty::Hard),
            ],
            vec!["Largest Rectangle in Histogram".to_string()],
        ),
    ]
}

pub struct DashboardHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    pub generator: Arc<FakeGenerator>,
    pub handles: DashboardTestHandles,
}

impl DashboardHarness {
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until pending loads and saves have flushed.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn actions(&self) -> DashboardActions {
        self.handles.actions()
    }

    /// Run `f` with the dashboard runtime active, as event handlers do.
    pub fn dispatch(&self, f: impl FnOnce(DashboardActions)) {
        let actions = self.actions();
        self.dom.in_runtime(|| f(actions));
    }

    pub fn store(&self) -> ProgressStore {
        let store = self.handles.store();
        self.dom.in_runtime(|| store.peek().clone())
    }

    pub async fn saved_progress(&self) -> Option<String> {
        self.repo.get_slot(PROGRESS_SLOT).await.expect("read progress slot")
    }
}

pub async fn setup_dashboard_harness(
    progress_json: Option<&str>,
    profile_json: Option<&str>,
) -> DashboardHarness {
    let repo = InMemoryRepository::new();
    if let Some(json) = progress_json {
        repo.put_slot(PROGRESS_SLOT, json).await.expect("seed progress");
    }
    if let Some(json) = profile_json {
        repo.put_slot(PROFILE_SLOT, json).await.expect("seed profile");
    }

    let slots = JsonSlots::new(Arc::new(repo.clone()));
    let generator = Arc::new(FakeGenerator::new("Track **complements** in a hash map."));
    let app = Arc::new(TestApp {
        progress: Arc::new(ProgressService::with_catalog(slots.clone(), test_catalog())),
        profile: Arc::new(ProfileService::new(slots)),
        explanations: Arc::new(ExplanationService::with_generator(generator.clone())),
    });
    let handles = DashboardTestHandles::default();

    let mut dom = VirtualDom::new_with_props(
        DashboardHarnessRoot,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();

    let mut harness = DashboardHarness {
        dom,
        repo,
        generator,
        handles,
    };
    harness.settle().await;
    harness
}
