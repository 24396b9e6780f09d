use dioxus::prelude::*;

use crate::vm::CategoryNavVm;

#[component]
pub fn Sidebar(items: Vec<CategoryNavVm>, on_select: Callback<String>) -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { class: "sidebar-title", "DSA Explorer" }
            ul { class: "sidebar-list",
                for item in items.iter() {
                    SidebarItem { key: "{item.name}", item: item.clone(), on_select }
                }
            }
        }
    }
}

#[component]
fn SidebarItem(item: CategoryNavVm, on_select: Callback<String>) -> Element {
    let class = if item.active {
        "sidebar-item sidebar-item--active"
    } else {
        "sidebar-item"
    };
    let name = item.name.clone();

    rsx! {
        li {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_select.call(name.clone()),
                span { class: "sidebar-icon", "{item.icon}" }
                span { class: "sidebar-name", "{item.name}" }
                span { class: "sidebar-progress", "{item.progress_label}" }
            }
        }
    }
}
