use dioxus::prelude::*;

use crate::vm::DonutVm;

#[component]
pub fn OverallChart(donut: DonutVm) -> Element {
    rsx! {
        section { class: "panel overall-chart",
            h3 { class: "panel-title", "Your Overall Progress" }
            p { class: "panel-note",
                "Track your progress across all DSA categories. This overview visualizes how many problems you've completed out of the total."
            }
            Donut { donut }
        }
    }
}

#[component]
pub fn DifficultyChart(donut: DonutVm) -> Element {
    rsx! {
        div { class: "panel difficulty-chart",
            h3 { class: "panel-title", "Difficulty Overview" }
            p { class: "panel-note",
                "This chart shows the distribution of problems by difficulty for the selected category."
            }
            Donut { donut }
        }
    }
}

#[component]
fn Donut(donut: DonutVm) -> Element {
    rsx! {
        figure { class: "donut",
            if let Some(title) = donut.title.clone() {
                figcaption { class: "donut-title", "{title}" }
            }
            svg {
                class: "donut-chart",
                view_box: "0 0 200 200",
                if let Some(track) = donut.track.clone() {
                    path {
                        class: "donut-track",
                        d: "{track}",
                        fill_rule: "evenodd",
                    }
                }
                for segment in donut.segments.clone() {
                    path {
                        key: "{segment.label}",
                        class: "donut-segment",
                        d: "{segment.path}",
                        fill: "{segment.fill}",
                        stroke: "{segment.border}",
                        stroke_width: "2",
                        fill_rule: "evenodd",
                        title { "{segment.label}" }
                    }
                }
            }
            ul { class: "donut-legend",
                for item in donut.legend.clone() {
                    li { key: "{item.label}", class: "donut-legend-item",
                        span {
                            class: "donut-swatch",
                            style: "background-color: {item.fill}",
                        }
                        span { class: "donut-legend-label", "{item.label}" }
                        span { class: "donut-legend-value", "{item.value}" }
                    }
                }
            }
        }
    }
}
