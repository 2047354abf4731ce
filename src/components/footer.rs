//! Footer - the closing message with the thread knot.

use dioxus::prelude::*;

use crate::context::use_reveal;

#[component]
pub fn Footer(groom_name: String, bride_name: String, date: String) -> Element {
    let (reveal, on_visible) = use_reveal();

    let footer_class = if reveal().is_revealed() {
        "footer revealed"
    } else {
        "footer"
    };

    // "28/12/2025" -> "28 • 12 • 2025"
    let dotted_date = date.replace('/', " • ");

    rsx! {
        footer {
            class: "{footer_class}",
            onvisible: move |evt| on_visible.call(evt),

            // Thread knot
            div { class: "footer-knot reveal-item",
                svg {
                    width: "80",
                    height: "80",
                    view_box: "0 0 80 80",
                    fill: "none",
                    circle {
                        cx: "40",
                        cy: "40",
                        r: "30",
                        stroke: "var(--red-thread)",
                        stroke_width: "2",
                    }
                    path {
                        d: "M 40 10 Q 60 20, 60 40 T 40 70 Q 20 60, 20 40 T 40 10",
                        stroke: "var(--red-thread)",
                        stroke_width: "1.5",
                    }
                    circle { class: "knot-core", cx: "40", cy: "40", r: "8", fill: "var(--red-thread)" }
                }
            }

            div { class: "footer-message reveal-item",
                p { class: "script-title footer-script", "Hẹn gặp lại ngày vui của chúng mình ❤️" }
                div { class: "footer-names",
                    div { class: "footer-rule" }
                    p { "{groom_name} & {bride_name}" }
                    div { class: "footer-rule" }
                }
            }

            p { class: "footer-date reveal-item", "{dotted_date}" }
        }
    }
}
