use dioxus::prelude::*;

use dsa_core::ProgressStore;
use dsa_core::explain::{ExplainAction, ExplainKey, ExplanationBoard};
use dsa_core::model::{DifficultyFilter, ProfileUrl};
use dsa_core::stats::{DifficultyCounts, OverallProgress};

use crate::context::AppContext;
use crate::views::charts::{DifficultyChart, OverallChart};
use crate::views::hard_list::HardList;
use crate::views::problem_list::ProblemPanel;
use crate::views::profile::ProfilePanel;
use crate::views::sidebar::Sidebar;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    difficulty_donut, map_category_nav, map_hard_problems, map_problem_rows, overall_donut,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    store: ProgressStore,
    profile: ProfileUrl,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let profile = ctx.profile();

    let resource = use_resource(move || {
        let progress = progress.clone();
        let profile = profile.clone();
        async move {
            let store = progress.load().await;
            let profile = profile.load().await;
            Ok::<_, ViewError>(DashboardData { store, profile })
        }
    });
    let state = view_state_from_resource(&resource);

    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "loading", "Loading..." }
        },
        ViewState::Ready(data) => rsx! {
            Dashboard { initial: data.store, profile: data.profile }
        },
        ViewState::Error(err) => rsx! {
            div { class: "fatal",
                p { "{err.message()}" }
            }
        },
    }
}

#[component]
fn Dashboard(initial: ProgressStore, profile: ProfileUrl) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let explanations = ctx.explanations();

    let mut store = use_signal(|| initial.clone());
    let mut board = use_signal(ExplanationBoard::new);

    // Writes queue behind the service's lock and snapshot the store only once they hold it.
    let persist = use_callback(move |()| {
        let progress = progress.clone();
        spawn(async move {
            progress
                .save_latest(|| ProgressStore::clone(&store.peek()))
                .await;
        });
    });

    // The merged catalog is written back once so a first run seeds the slot.
    use_hook(move || persist.call(()));

    let on_select = use_callback(move |name: String| {
        store.write().select_category(name);
    });

    let on_filter = use_callback(move |filter: DifficultyFilter| {
        store.write().set_filter(filter);
    });

    let on_toggle = use_callback(move |(name, completed): (String, bool)| {
        let category = store.peek().active_category_name().to_string();
        if store.write().toggle_completion(&category, &name, completed) {
            persist.call(());
        }
    });

    let on_explain = use_callback(move |name: String| {
        let category = store.peek().active_category_name().to_string();
        let found = store
            .peek()
            .category(&category)
            .and_then(|c| c.problem(&name))
            .map(|problem| (problem.difficulty(), problem.explanation().is_some()));
        let Some((difficulty, has_cached)) = found else {
            return;
        };

        let key = ExplainKey::new(category.as_str(), name.as_str());
        if board.write().click(&key, has_cached) != ExplainAction::Fetch {
            return;
        }

        let explanations = explanations.clone();
        spawn(async move {
            let text = explanations.explain(&name, difficulty).await;
            store.write().set_explanation(&category, &name, text);
            board.write().complete(&key);
            persist.call(());
        });
    });

    let on_open = use_callback(move |url: String| ctx.open_link(&url));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(
                    DashboardActions {
                        select: on_select,
                        filter: on_filter,
                        toggle: on_toggle,
                        explain: on_explain,
                    },
                    store,
                );
            }
        }
    }

    let current = store.read();
    let Some(category) = current.active_category() else {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    };

    let nav = map_category_nav(current.categories(), current.active_category_name());
    let overall = overall_donut(OverallProgress::from_categories(current.categories()));
    let difficulty = difficulty_donut(DifficultyCounts::from_category(category));
    let rows = map_problem_rows(category, current.active_filter(), &board.read());
    let hard_rows = map_hard_problems(category);
    let title = category.name().to_string();
    let active_filter = current.active_filter();

    rsx! {
        div { class: "layout",
            Sidebar { items: nav, on_select }
            main { class: "main",
                div { class: "main-inner",
                    header { class: "page-header",
                        h2 { class: "page-title", "{title}" }
                        p { class: "page-subtitle", "An interactive guide to the DSA problem list." }
                    }
                    OverallChart { donut: overall }
                    div { class: "grid",
                        DifficultyChart { donut: difficulty }
                        ProblemPanel {
                            rows,
                            active_filter,
                            on_filter,
                            on_toggle,
                            on_explain,
                            on_open,
                        }
                    }
                    HardList { rows: hard_rows, on_open }
                    ProfilePanel { initial: profile, on_open }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct DashboardActions {
    pub(crate) select: Callback<String>,
    pub(crate) filter: Callback<DifficultyFilter>,
    pub(crate) toggle: Callback<(String, bool)>,
    pub(crate) explain: Callback<String>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    actions: Rc<RefCell<Option<DashboardActions>>>,
    store: Rc<RefCell<Option<Signal<ProgressStore>>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(&self, actions: DashboardActions, store: Signal<ProgressStore>) {
        *self.actions.borrow_mut() = Some(actions);
        *self.store.borrow_mut() = Some(store);
    }

    pub(crate) fn actions(&self) -> DashboardActions {
        (*self.actions.borrow()).expect("dashboard actions registered")
    }

    pub(crate) fn store(&self) -> Signal<ProgressStore> {
        (*self.store.borrow()).expect("dashboard store registered")
    }
}
