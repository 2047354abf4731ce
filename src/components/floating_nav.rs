//! Floating navigation - charm buttons on the right edge.
//!
//! Section entries smooth-scroll to their anchors; the RSVP and gift
//! entries open the overlays through callbacks. Opening one overlay leaves
//! the other untouched.

use dioxus::document;
use dioxus::prelude::*;

/// What a nav charm does when tapped.
#[derive(Clone, Copy, PartialEq, Eq)]
enum NavAction {
    ScrollTo(&'static str),
    OpenRsvp,
    OpenGift,
}

/// One nav entry: label, icon path data, action.
struct NavItem {
    label: &'static str,
    icon_path: &'static str,
    action: NavAction,
}

static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Địa điểm",
        icon_path: "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        action: NavAction::ScrollTo("venues"),
    },
    NavItem {
        label: "Album",
        icon_path: "M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 0 0 1 2 2zM12 18a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
        action: NavAction::ScrollTo("gallery"),
    },
    NavItem {
        label: "RSVP",
        icon_path: "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
        action: NavAction::OpenRsvp,
    },
    NavItem {
        label: "Mừng cưới",
        icon_path: "M20 12v10H4V12M2 7h20v5H2zM12 22V7M12 7H7.5a2.5 2.5 0 0 1 0-5C11 2 12 7 12 7zM12 7h4.5a2.5 2.5 0 0 0 0-5C13 2 12 7 12 7z",
        action: NavAction::OpenGift,
    },
];

/// Smooth-scroll the page to a section anchor.
fn scroll_to_section(section_id: &str) {
    let script = format!(
        r#"
        const section = document.getElementById("{section_id}");
        if (section !== null) section.scrollIntoView({{ behavior: "smooth", block: "start" }});
        "#
    );
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            tracing::debug!("scroll eval failed: {:?}", e);
        }
    });
}

#[component]
pub fn FloatingNav(
    /// Callback to open the RSVP overlay
    on_rsvp: EventHandler<()>,
    /// Callback to open the gift overlay
    on_gift: EventHandler<()>,
) -> Element {
    let mut active: Signal<Option<&'static str>> = use_signal(|| None);

    rsx! {
        nav { class: "floating-nav",
            div { class: "nav-thread" }

            for item in NAV_ITEMS.iter() {
                button {
                    class: if *active.read() == Some(item.label) { "nav-charm active" } else { "nav-charm" },
                    onclick: {
                        let action = item.action;
                        let label = item.label;
                        move |_| {
                            active.set(Some(label));
                            match action {
                                NavAction::ScrollTo(section_id) => scroll_to_section(section_id),
                                NavAction::OpenRsvp => on_rsvp.call(()),
                                NavAction::OpenGift => on_gift.call(()),
                            }
                        }
                    },

                    svg {
                        class: "nav-icon",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        path { d: "{item.icon_path}" }
                    }

                    span { class: "nav-tooltip", "{item.label}" }
                }
            }
        }
    }
}
