use dioxus::prelude::*;

use dsa_core::model::DifficultyFilter;

use crate::vm::ProblemRowVm;

#[component]
pub fn ProblemPanel(
    rows: Vec<ProblemRowVm>,
    active_filter: DifficultyFilter,
    on_filter: Callback<DifficultyFilter>,
    on_toggle: Callback<(String, bool)>,
    on_explain: Callback<String>,
    on_open: Callback<String>,
) -> Element {
    rsx! {
        div { class: "panel problem-panel",
            div { class: "problem-panel-header",
                div {
                    h3 { class: "panel-title", "Problem List" }
                    p { class: "panel-note", "Filter the problems by difficulty." }
                }
                FilterBar { active: active_filter, on_filter }
            }
            if rows.is_empty() {
                div { class: "problem-empty", "No problems found for this filter." }
            } else {
                div { class: "problem-list",
                    for row in rows.iter() {
                        ProblemRow {
                            key: "{row.name}",
                            row: row.clone(),
                            on_toggle,
                            on_explain,
                            on_open,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterBar(active: DifficultyFilter, on_filter: Callback<DifficultyFilter>) -> Element {
    rsx! {
        div { class: "filter-bar",
            for filter in DifficultyFilter::ALL {
                button {
                    key: "{filter.label()}",
                    class: if filter == active { "filter-button filter-button--active" } else { "filter-button" },
                    r#type: "button",
                    onclick: move |_| on_filter.call(filter),
                    "{filter.label()}"
                }
            }
        }
    }
}

#[component]
fn ProblemRow(
    row: ProblemRowVm,
    on_toggle: Callback<(String, bool)>,
    on_explain: Callback<String>,
    on_open: Callback<String>,
) -> Element {
    let completed = row.completed;
    let toggle_name = row.name.clone();
    let explain_name = row.name.clone();
    let url = row.url.clone();
    let name_class = if completed {
        "problem-name problem-name--done"
    } else {
        "problem-name"
    };
    let tag_class = if completed {
        format!("{} tag--muted", row.tag_class)
    } else {
        row.tag_class.to_string()
    };

    rsx! {
        div { class: "problem-item",
            div { class: "problem-row",
                input {
                    class: "problem-check",
                    r#type: "checkbox",
                    checked: completed,
                    onchange: move |_| on_toggle.call((toggle_name.clone(), !completed)),
                }
                span { class: "{name_class}", "{row.name}" }
                div { class: "problem-actions",
                    span { class: "{tag_class}", "{row.difficulty}" }
                    a {
                        class: "problem-link",
                        href: "{row.url}",
                        title: "View on LeetCode",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_open.call(url.clone());
                        },
                        "↗"
                    }
                    button {
                        class: "explain-button",
                        r#type: "button",
                        disabled: row.loading,
                        onclick: move |_| on_explain.call(explain_name.clone()),
                        if row.loading {
                            span { class: "explain-spinner" }
                        }
                        "Explain Problem"
                    }
                }
            }
            if row.visible {
                div { class: "explanation",
                    if row.loading {
                        p { class: "explanation-loading", "Loading explanation..." }
                    } else if let Some(html) = row.explanation_html.clone() {
                        div { class: "explanation-body", dangerous_inner_html: "{html}" }
                    }
                }
            }
        }
    }
}
