use dioxus::prelude::*;

use dsa_core::model::ProfileUrl;

use crate::context::AppContext;

#[component]
pub fn ProfilePanel(initial: ProfileUrl, on_open: Callback<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let profile = ctx.profile();
    let mut saved = use_signal(|| initial.clone());
    let mut draft = use_signal(|| initial.as_str().to_string());

    let on_save = move |_| {
        saved.set(ProfileUrl::new(draft()));
        let profile = profile.clone();
        spawn(async move {
            profile
                .save_latest(|| saved.peek().as_str().to_string())
                .await;
        });
    };

    let saved_link = saved.read().link().map(str::to_string);

    rsx! {
        section { class: "panel profile-panel",
            h3 { class: "panel-title", "Your LeetCode Profile" }
            p { class: "panel-note",
                "You can save your LeetCode profile URL here for quick access. Progress is stored on this machine only; your LeetCode stats are not synced."
            }
            div { class: "profile-form",
                input {
                    class: "profile-input",
                    r#type: "url",
                    placeholder: "Paste your LeetCode profile URL",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "profile-save",
                    r#type: "button",
                    onclick: on_save,
                    "Save Profile"
                }
            }
            match saved_link {
                Some(url) => rsx! {
                    p { class: "profile-saved",
                        span { "Saved Profile:" }
                        a {
                            class: "profile-link",
                            href: "{url}",
                            onclick: {
                                let url = url.clone();
                                move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_open.call(url.clone());
                                }
                            },
                            "{url}"
                        }
                    }
                },
                None => rsx! {
                    p { class: "profile-empty", "No profile URL saved yet." }
                },
            }
        }
    }
}
