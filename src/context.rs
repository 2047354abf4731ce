//! Application context for the invitation.
//!
//! The content record and the RSVP client are provided once at the root and
//! read by every section via use_context. Content is immutable; components
//! never write through these handles.

use dioxus::events::VisibleData;
use dioxus::prelude::*;
use redthread_core::{RevealLatch, RsvpClient, WeddingContent};

/// Settings resolved from the command line / environment before launch.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// The content record the page renders from
    pub content: WeddingContent,
    /// Submission endpoint, if configured
    pub rsvp_endpoint: Option<String>,
}

/// Hook to access the wedding content from context.
///
/// The signal is written exactly once (at mount); readers treat it as
/// immutable props.
pub fn use_content() -> Signal<WeddingContent> {
    use_context::<Signal<WeddingContent>>()
}

/// Hook to access the RSVP dispatch client from context.
pub fn use_rsvp_client() -> Signal<RsvpClient> {
    use_context::<Signal<RsvpClient>>()
}

/// Hook for a section's one-shot scroll reveal.
///
/// Returns the latch plus the `onvisible` handler to attach to the section
/// element. The latch trips the first time the section intersects the
/// viewport and never reverts, so the entrance animation runs once.
pub fn use_reveal() -> (Signal<RevealLatch>, Callback<Event<VisibleData>>) {
    let mut latch = use_signal(RevealLatch::default);
    let on_visible = use_callback(move |evt: Event<VisibleData>| {
        // peek + intersecting guard: write (and re-render) only on the
        // false -> true transition
        let intersecting = evt.data().is_intersecting().unwrap_or(false);
        if intersecting && !latch.peek().is_revealed() {
            latch.write().observe_visible(true);
        }
    });
    (latch, on_visible)
}
