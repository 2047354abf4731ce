//! Couple introduction - two polaroid portraits with their quotes.

use dioxus::prelude::*;
use redthread_core::Person;

use crate::context::use_reveal;

/// One polaroid portrait card with its caption and quote.
#[component]
fn PortraitCard(person: Person, tilt: String) -> Element {
    rsx! {
        div { class: "portrait-column reveal-item {tilt}",
            div { class: "polaroid",
                div { class: "polaroid-photo",
                    img { src: "{person.image}", alt: "{person.display_name}" }
                }
                div { class: "polaroid-caption", "{person.display_name}" }
                div { class: "heart-sticker",
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 16 16",
                        fill: "white",
                        path { d: "M8 14s-6-4.5-6-8a3 3 0 0 1 6-2 3 3 0 0 1 6 2c0 3.5-6 8-6 8z" }
                    }
                }
            }

            div { class: "quote",
                svg {
                    class: "quote-mark",
                    fill: "currentColor",
                    view_box: "0 0 24 24",
                    path { d: "M6 17h3l2-4V7H5v6h3zm8 0h3l2-4V7h-6v6h3z" }
                }
                p { class: "quote-text", "{person.quote}" }
            }
        }
    }
}

/// Couple section with scroll-triggered reveal. The dashed thread behind
/// the portraits and the connecting heart are pure decoration.
#[component]
pub fn CoupleSection(groom: Person, bride: Person) -> Element {
    let (reveal, on_visible) = use_reveal();

    let section_class = if reveal().is_revealed() {
        "couple-section revealed"
    } else {
        "couple-section"
    };

    rsx! {
        section {
            class: "{section_class}",
            onvisible: move |evt| on_visible.call(evt),

            div { class: "couple-thread" }

            header { class: "section-heading reveal-item",
                h2 { class: "script-title", "Tình yêu với chúng mình là" }
                div { class: "heading-rule" }
            }

            div { class: "couple-grid",
                PortraitCard { person: groom, tilt: "tilt-left" }
                PortraitCard { person: bride, tilt: "tilt-right" }
            }

            div { class: "connecting-heart reveal-item",
                svg {
                    width: "24",
                    height: "24",
                    view_box: "0 0 24 24",
                    fill: "white",
                    path { d: "M12 21s-9-6.75-9-12a4.5 4.5 0 0 1 9-3 4.5 4.5 0 0 1 9 3c0 5.25-9 12-9 12z" }
                }
            }
        }
    }
}
