//! Hero banner - full-height opening frame with the couple's names.

use dioxus::prelude::*;

/// Hero section with the banner photo, the names card joined by the red
/// thread, a falling petal, and the scroll cue. All choreography is CSS
/// keyframes; the section carries no state.
#[component]
pub fn HeroSection(hero_image: String, groom_name: String, bride_name: String) -> Element {
    rsx! {
        section { class: "hero",
            // Banner photo with slow zoom-in and vignette
            div { class: "hero-image-frame",
                img {
                    class: "hero-image",
                    src: "{hero_image}",
                    alt: "Ảnh cưới",
                }
                div { class: "hero-vignette" }
            }

            // Falling petal
            div { class: "hero-petal",
                svg {
                    width: "30",
                    height: "30",
                    view_box: "0 0 30 30",
                    fill: "none",
                    path {
                        d: "M15 2C15 2 10 8 10 15C10 22 15 28 15 28C15 28 20 22 20 15C20 8 15 2 15 2Z",
                        fill: "var(--red-thread)",
                        opacity: "0.7",
                    }
                }
            }

            // Names joined by the thread
            div { class: "hero-names-wrap",
                div { class: "hero-thread thread-above" }
                div { class: "hero-names-card",
                    h1 { class: "hero-names", "{groom_name} & {bride_name}" }
                    div { class: "hero-underline" }
                }
                div { class: "hero-thread thread-below" }
            }

            // Scroll cue
            div { class: "scroll-cue",
                div { class: "scroll-cue-frame",
                    div { class: "scroll-cue-dot" }
                }
            }
        }
    }
}
