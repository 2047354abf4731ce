//! Photo wall and lightbox.
//!
//! Photos hang on a string with alternating tilt; clicking one opens the
//! full-screen lightbox. The lightbox owns a `Lightbox` navigator from the
//! core crate: close/prev/next with wraparound, counter label included.

use dioxus::prelude::*;
use redthread_core::{Lightbox, Photo};

use crate::context::use_reveal;

/// Tilt class for a photo by its position on the string.
fn tilt_class(index: usize) -> &'static str {
    match index % 3 {
        0 => "tilt-left",
        1 => "tilt-right",
        _ => "tilt-slight",
    }
}

/// Gallery section: the pinned photo grid plus the lightbox overlay.
#[component]
pub fn GallerySection(photos: Vec<Photo>) -> Element {
    let (reveal, on_visible) = use_reveal();
    let photo_count = photos.len();
    let mut lightbox = use_signal(move || Lightbox::new(photo_count));

    let section_class = if reveal().is_revealed() {
        "gallery-section revealed"
    } else {
        "gallery-section"
    };

    let selected = lightbox.read().selected();
    let counter = lightbox.read().counter_label();

    rsx! {
        section {
            id: "gallery",
            class: "{section_class}",
            onvisible: move |evt| on_visible.call(evt),

            header { class: "section-heading reveal-item",
                h2 { class: "script-title", "Khoảnh khắc của chúng mình" }
                p { class: "section-subtitle", "Những kỷ niệm đẹp được lưu giữ" }
                div { class: "heading-rule" }
            }

            div { class: "photo-wall",
                for (index, photo) in photos.iter().enumerate() {
                    div {
                        key: "{photo.src}",
                        class: "photo-pin reveal-item {tilt_class(index)}",
                        style: format!("transition-delay: {}ms;", index * 100),
                        onclick: move |_| {
                            lightbox.write().open(index);
                        },

                        // Red clip holding the photo to the string
                        div { class: "photo-clip",
                            svg {
                                width: "30",
                                height: "40",
                                view_box: "0 0 30 40",
                                rect { x: "5", y: "0", width: "20", height: "15", rx: "2", fill: "var(--red-thread)" }
                                rect { x: "8", y: "8", width: "14", height: "2", fill: "white", opacity: "0.3" }
                                path {
                                    d: "M 10 15 L 10 25 Q 10 30, 15 30 Q 20 30, 20 25 L 20 15",
                                    fill: "var(--red-thread)",
                                }
                            }
                        }

                        div { class: "photo-frame",
                            img {
                                src: "{photo.src}",
                                alt: format!("Kỷ niệm {}", index + 1),
                            }
                            if index % 4 == 0 {
                                div { class: "photo-heart",
                                    svg {
                                        width: "12",
                                        height: "12",
                                        view_box: "0 0 12 12",
                                        fill: "white",
                                        path { d: "M6 10.5s-4.5-3.375-4.5-6a2.25 2.25 0 0 1 4.5-1.5 2.25 2.25 0 0 1 4.5 1.5c0 2.625-4.5 6-4.5 6z" }
                                    }
                                }
                            }
                            if let Some(date) = photo.date.as_ref() {
                                div { class: "photo-date", "{date}" }
                            }
                        }
                    }
                }
            }

            // Lightbox overlay
            if let Some(open_index) = selected {
                div {
                    class: "lightbox-overlay",
                    onclick: move |_| lightbox.write().close(),

                    button {
                        class: "lightbox-button lightbox-close",
                        onclick: move |e| {
                            e.stop_propagation();
                            lightbox.write().close();
                        },
                        "\u{00D7}"
                    }

                    button {
                        class: "lightbox-button lightbox-prev",
                        onclick: move |e| {
                            e.stop_propagation();
                            lightbox.write().prev();
                        },
                        "\u{2039}"
                    }

                    button {
                        class: "lightbox-button lightbox-next",
                        onclick: move |e| {
                            e.stop_propagation();
                            lightbox.write().next();
                        },
                        "\u{203A}"
                    }

                    div {
                        class: "lightbox-stage",
                        onclick: move |e| e.stop_propagation(),

                        img {
                            class: "lightbox-image",
                            src: photos[open_index].src.clone(),
                            alt: format!("Kỷ niệm {}", open_index + 1),
                        }

                        if let Some(label) = counter {
                            div { class: "lightbox-counter", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
