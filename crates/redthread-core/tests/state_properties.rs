//! Property-based tests for the page state machines
//!
//! Uses proptest to verify the navigation and submission invariants that
//! the unit tests only spot-check.

use proptest::prelude::*;

use redthread_core::rsvp::{GuestCount, RsvpForm, SubmitPhase};
use redthread_core::{Dispatched, Lightbox, RevealLatch, SiteError};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Gallery sizes worth exercising; 11 is the shipped wall.
fn gallery_len_strategy() -> impl Strategy<Value = usize> {
    1usize..=32
}

/// Mixed navigation steps applied to an open lightbox
#[derive(Debug, Clone, Copy)]
enum NavStep {
    Next,
    Prev,
}

fn nav_steps_strategy() -> impl Strategy<Value = Vec<NavStep>> {
    prop::collection::vec(
        prop_oneof![Just(NavStep::Next), Just(NavStep::Prev)],
        0..64,
    )
}

fn guest_count_strategy() -> impl Strategy<Value = GuestCount> {
    prop::sample::select(GuestCount::ALL.to_vec())
}

// ============================================================================
// Lightbox Properties
// ============================================================================

proptest! {
    /// next() composed N times from any start index returns to that index.
    #[test]
    fn prop_next_n_times_is_identity(
        len in gallery_len_strategy(),
        start_seed in 0usize..1024,
    ) {
        let start = start_seed % len;
        let mut lightbox = Lightbox::new(len);
        prop_assert!(lightbox.open(start));

        for _ in 0..len {
            lightbox.next();
        }
        prop_assert_eq!(lightbox.selected(), Some(start));
    }

    /// prev() composed N times is likewise a full cycle.
    #[test]
    fn prop_prev_n_times_is_identity(
        len in gallery_len_strategy(),
        start_seed in 0usize..1024,
    ) {
        let start = start_seed % len;
        let mut lightbox = Lightbox::new(len);
        prop_assert!(lightbox.open(start));

        for _ in 0..len {
            lightbox.prev();
        }
        prop_assert_eq!(lightbox.selected(), Some(start));
    }

    /// Any mix of navigation steps keeps the selection in range; close()
    /// afterwards always yields none.
    #[test]
    fn prop_navigation_preserves_validity(
        len in gallery_len_strategy(),
        start_seed in 0usize..1024,
        steps in nav_steps_strategy(),
    ) {
        let start = start_seed % len;
        let mut lightbox = Lightbox::new(len);
        prop_assert!(lightbox.open(start));

        for step in steps {
            match step {
                NavStep::Next => lightbox.next(),
                NavStep::Prev => lightbox.prev(),
            }
            let selected = lightbox.selected().expect("open lightbox keeps a selection");
            prop_assert!(selected < len);
        }

        lightbox.close();
        prop_assert_eq!(lightbox.selected(), None);
    }

    /// prev() undoes next() at every position.
    #[test]
    fn prop_prev_inverts_next(
        len in gallery_len_strategy(),
        start_seed in 0usize..1024,
    ) {
        let start = start_seed % len;
        let mut lightbox = Lightbox::new(len);
        prop_assert!(lightbox.open(start));
        lightbox.next();
        lightbox.prev();
        prop_assert_eq!(lightbox.selected(), Some(start));
    }
}

// ============================================================================
// RSVP Form Properties
// ============================================================================

proptest! {
    /// A failing transport never loses or alters the entered draft.
    #[test]
    fn prop_failed_submit_preserves_draft(
        name in "[^\\s][\\PC]{0,40}",
        message in "[\\PC]{0,200}",
        guests in guest_count_strategy(),
        attending in any::<bool>(),
    ) {
        let mut form = RsvpForm::new();
        form.set_name(name);
        form.set_guests(guests);
        form.set_attending(attending);
        form.set_message(message);
        let before = form.draft().clone();

        let payload = form.begin_submit().expect("named draft is submittable");
        prop_assert_eq!(&payload.name, &before.name);
        prop_assert_eq!(payload.guests.as_str(), before.guests.as_str());

        form.resolve_submit(Err(SiteError::Dispatch("transport down".to_string())));
        prop_assert_eq!(form.phase(), SubmitPhase::Failed);
        prop_assert_eq!(form.draft(), &before);
    }

    /// A successful submit always ends Succeeded with an empty draft, no
    /// matter what was entered.
    #[test]
    fn prop_successful_submit_clears_draft(
        name in "[^\\s][\\PC]{0,40}",
        message in "[\\PC]{0,200}",
        guests in guest_count_strategy(),
        attending in any::<bool>(),
    ) {
        let mut form = RsvpForm::new();
        form.set_name(name);
        form.set_guests(guests);
        form.set_attending(attending);
        form.set_message(message);

        form.begin_submit().expect("named draft is submittable");
        form.resolve_submit(Ok(Dispatched));

        prop_assert_eq!(form.phase(), SubmitPhase::Succeeded);
        prop_assert!(form.draft().name.is_empty());
        prop_assert!(form.draft().message.is_empty());
    }
}

// ============================================================================
// Reveal Latch Properties
// ============================================================================

proptest! {
    /// Once revealed, no later observation sequence un-reveals the latch.
    #[test]
    fn prop_latch_is_one_shot(
        threshold in 0.0f64..=1.0,
        ratios in prop::collection::vec(0.0f64..=1.0, 1..32),
    ) {
        let mut latch = RevealLatch::new(threshold);
        let mut revealed_at = None;

        for (i, ratio) in ratios.iter().enumerate() {
            let transitioned = latch.observe(*ratio);
            if transitioned {
                prop_assert!(revealed_at.is_none(), "latch transitioned twice");
                revealed_at = Some(i);
            }
            if revealed_at.is_some() {
                prop_assert!(latch.is_revealed());
            }
        }
    }
}

// ============================================================================
// Shipped-content scenarios
// ============================================================================

/// The 11-photo wall from the shipped content: open(10), next() wraps to 0,
/// prev() returns to 10.
#[test]
fn test_shipped_gallery_wraparound() {
    let gallery_len = redthread_core::WeddingContent::builtin().gallery.len();
    assert_eq!(gallery_len, 11);

    let mut lightbox = Lightbox::new(gallery_len);
    assert!(lightbox.open(10));
    lightbox.next();
    assert_eq!(lightbox.selected(), Some(0));
    lightbox.prev();
    assert_eq!(lightbox.selected(), Some(10));
}

/// A filled draft submitted against a failing transport ends Failed with
/// the exact values that were entered.
#[test]
fn test_failing_transport_scenario() {
    let mut form = RsvpForm::new();
    form.set_name("An");
    form.set_attending(true);
    form.set_guests(GuestCount::Two);
    form.set_message("");
    let entered = form.draft().clone();

    form.begin_submit().expect("submittable");
    form.resolve_submit(Err(SiteError::Dispatch("no route to host".to_string())));

    assert_eq!(form.phase(), SubmitPhase::Failed);
    assert_eq!(form.draft(), &entered);
}
