//! Venue cards - the two wedding parties with address, schedule, and map.

use dioxus::prelude::*;
use redthread_core::{PerSide, Venue};

use crate::components::QrCodeDisplay;
use crate::context::use_reveal;

/// Ticket-style card for one venue.
///
/// The map opens in the guest's browser; the QR carries the same link so a
/// phone can be pointed at the card directly.
#[component]
fn VenueCard(venue: Venue) -> Element {
    rsx! {
        div { class: "venue-card reveal-item",
            div { class: "venue-card-trim" }

            h3 { class: "script-title venue-title", "{venue.title}" }
            p { class: "venue-subtitle", "{venue.subtitle}" }

            div { class: "venue-divider",
                div { class: "divider-line" }
                div { class: "divider-dot" }
                div { class: "divider-line" }
            }

            div { class: "venue-row",
                svg {
                    class: "venue-icon",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    path { d: "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" }
                    circle { cx: "12", cy: "10", r: "3" }
                }
                p { class: "venue-address", "{venue.address}" }
            }

            div { class: "venue-row",
                svg {
                    class: "venue-icon",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "12", cy: "12", r: "10" }
                    path { d: "M12 6v6l4 2" }
                }
                p { class: "venue-schedule",
                    span { class: "venue-time", "{venue.time}" }
                    span { class: "venue-separator", "|" }
                    span { "{venue.date}" }
                }
            }

            div { class: "venue-actions",
                a {
                    class: "map-button",
                    href: "{venue.map_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Xem bản đồ"
                }
                div { class: "venue-qr",
                    QrCodeDisplay { data: venue.map_url.clone(), size: 96 }
                    span { class: "venue-qr-hint", "quét để mở bản đồ" }
                }
            }

            // Ticket perforations
            div { class: "perforation left" }
            div { class: "perforation right" }
        }
    }
}

/// Venue section with both parties, scroll-revealed.
#[component]
pub fn VenueSection(venues: PerSide<Venue>) -> Element {
    let (reveal, on_visible) = use_reveal();

    let section_class = if reveal().is_revealed() {
        "venue-section revealed"
    } else {
        "venue-section"
    };

    rsx! {
        section {
            id: "venues",
            class: "{section_class}",
            onvisible: move |evt| on_visible.call(evt),

            header { class: "section-heading reveal-item",
                h2 { class: "script-title", "Thông tin tiệc cưới" }
                p { class: "section-subtitle",
                    "Chúng mình rất vui được đón tiếp quý khách tại hai buổi tiệc"
                }
                div { class: "heading-rule" }
            }

            div { class: "venue-grid",
                VenueCard { venue: venues.groom.clone() }
                VenueCard { venue: venues.bride.clone() }
            }
        }
    }
}
