use dioxus::prelude::*;

use crate::vm::HardProblemVm;

/// Renders nothing when the category has no curated hard problems.
#[component]
pub fn HardList(rows: Vec<HardProblemVm>, on_open: Callback<String>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "panel hard-list",
            h3 { class: "panel-title", "Curated Hard Problems" }
            p { class: "panel-note",
                "This is a curated list of problems that are considered particularly challenging for this topic, which may include some Medium-difficulty questions."
            }
            div { class: "hard-list-rows",
                for row in rows.iter() {
                    HardRow { key: "{row.name}", row: row.clone(), on_open }
                }
            }
        }
    }
}

#[component]
fn HardRow(row: HardProblemVm, on_open: Callback<String>) -> Element {
    let url = row.url.clone();
    rsx! {
        div { class: "hard-row",
            span { class: "hard-name", "{row.name}" }
            div { class: "problem-actions",
                span { class: "{row.tag_class}", "{row.difficulty}" }
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
            }
        }
    }
}
