//! RSVP form state.
//!
//! The form holds a small draft record (name, attendance, guest count,
//! message) and a submission phase. Field updates do no validation; the
//! submission boundary enforces the single required field. A submission
//! moves through exactly one Pending -> terminal transition per attempt:
//! success clears the draft so the owning overlay can close, failure
//! preserves the draft verbatim so the guest can retry.

use serde::{Deserialize, Serialize};

use crate::dispatch::{Dispatched, RsvpPayload};
use crate::error::SiteError;

/// Guest count choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuestCount {
    #[default]
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5+")]
    FivePlus,
}

impl GuestCount {
    pub const ALL: [GuestCount; 5] = [
        GuestCount::One,
        GuestCount::Two,
        GuestCount::Three,
        GuestCount::Four,
        GuestCount::FivePlus,
    ];

    /// Wire value, matching the select options ("1".."4", "5+").
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestCount::One => "1",
            GuestCount::Two => "2",
            GuestCount::Three => "3",
            GuestCount::Four => "4",
            GuestCount::FivePlus => "5+",
        }
    }

    /// Display label for the select options.
    pub fn label(&self) -> &'static str {
        match self {
            GuestCount::One => "1 người",
            GuestCount::Two => "2 người",
            GuestCount::Three => "3 người",
            GuestCount::Four => "4 người",
            GuestCount::FivePlus => "5+ người",
        }
    }

    /// Parse a wire value back into a choice. Unknown values fall back to
    /// the default, since the select can only emit known ones.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "2" => GuestCount::Two,
            "3" => GuestCount::Three,
            "4" => GuestCount::Four,
            "5+" => GuestCount::FivePlus,
            _ => GuestCount::One,
        }
    }
}

/// The in-progress, not-yet-submitted form values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RsvpDraft {
    pub name: String,
    pub guests: GuestCount,
    pub attending: bool,
    pub message: String,
}

impl RsvpDraft {
    /// Fresh draft as created when the RSVP overlay opens.
    pub fn empty() -> Self {
        Self {
            attending: true,
            ..Default::default()
        }
    }
}

/// Observable submission phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Dispatch started, continuation not yet observed
    Pending,
    /// Dispatched without a transport error; draft was cleared
    Succeeded,
    /// Dispatch failed; draft preserved for retry
    Failed,
}

/// RSVP form store: draft plus submission phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RsvpForm {
    draft: RsvpDraft,
    phase: SubmitPhase,
}

impl RsvpForm {
    pub fn new() -> Self {
        Self {
            draft: RsvpDraft::empty(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn draft(&self) -> &RsvpDraft {
        &self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_guests(&mut self, guests: GuestCount) {
        self.draft.guests = guests;
    }

    pub fn set_attending(&mut self, attending: bool) {
        self.draft.attending = attending;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }

    /// Whether the required fields are filled and no submit is in flight.
    pub fn can_submit(&self) -> bool {
        !self.draft.name.trim().is_empty() && self.phase != SubmitPhase::Pending
    }

    /// Start a submission.
    ///
    /// Moves the form to Pending and returns the wire payload the caller
    /// should hand to the dispatcher. Returns None when the required name is
    /// missing or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<RsvpPayload> {
        if !self.can_submit() {
            return None;
        }
        self.phase = SubmitPhase::Pending;
        Some(RsvpPayload::from_draft(&self.draft))
    }

    /// Observe the dispatch continuation.
    ///
    /// Only a Pending form reacts, so each submission reaches a terminal
    /// phase exactly once even if a stale continuation fires late.
    pub fn resolve_submit(&mut self, outcome: Result<Dispatched, SiteError>) {
        if self.phase != SubmitPhase::Pending {
            return;
        }
        match outcome {
            Ok(Dispatched) => {
                self.draft = RsvpDraft::empty();
                self.phase = SubmitPhase::Succeeded;
            }
            Err(err) => {
                tracing::warn!("RSVP dispatch failed: {}", err);
                self.phase = SubmitPhase::Failed;
            }
        }
    }

    /// Discard the draft, as when the overlay closes.
    pub fn reset(&mut self) {
        self.draft = RsvpDraft::empty();
        self.phase = SubmitPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RsvpForm {
        let mut form = RsvpForm::new();
        form.set_name("An");
        form.set_guests(GuestCount::Two);
        form.set_attending(true);
        form
    }

    #[test]
    fn test_empty_draft_defaults() {
        let form = RsvpForm::new();
        assert_eq!(form.draft().name, "");
        assert_eq!(form.draft().guests, GuestCount::One);
        assert!(form.draft().attending);
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_begin_submit_requires_name() {
        let mut form = RsvpForm::new();
        assert!(form.begin_submit().is_none());
        form.set_name("   ");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_success_clears_draft() {
        let mut form = filled_form();
        form.set_message("Chúc mừng!");

        let payload = form.begin_submit().expect("submittable");
        assert_eq!(form.phase(), SubmitPhase::Pending);
        assert_eq!(payload.guests, "2");

        form.resolve_submit(Ok(Dispatched));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        assert_eq!(form.draft(), &RsvpDraft::empty());
    }

    #[test]
    fn test_submit_failure_preserves_draft() {
        let mut form = RsvpForm::new();
        form.set_name("An");
        form.set_attending(true);
        form.set_guests(GuestCount::Two);
        form.set_message("");
        let before = form.draft().clone();

        form.begin_submit().expect("submittable");
        form.resolve_submit(Err(SiteError::Dispatch("connection reset".to_string())));

        assert_eq!(form.phase(), SubmitPhase::Failed);
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_no_double_submit_while_pending() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_resolve_only_acts_once() {
        let mut form = filled_form();
        form.begin_submit().expect("submittable");
        form.resolve_submit(Ok(Dispatched));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);

        // A stale continuation must not flip the terminal phase
        form.resolve_submit(Err(SiteError::Dispatch("late".to_string())));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
    }

    #[test]
    fn test_retry_after_failure() {
        let mut form = filled_form();
        form.begin_submit().expect("submittable");
        form.resolve_submit(Err(SiteError::Dispatch("offline".to_string())));
        assert_eq!(form.phase(), SubmitPhase::Failed);

        // Draft intact, so the retry submits the same values
        let payload = form.begin_submit().expect("retryable");
        assert_eq!(payload.name, "An");
        form.resolve_submit(Ok(Dispatched));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
    }

    #[test]
    fn test_reset_discards_draft() {
        let mut form = filled_form();
        form.set_message("draft text");
        form.reset();
        assert_eq!(form.draft(), &RsvpDraft::empty());
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_guest_count_round_trip() {
        for count in GuestCount::ALL {
            assert_eq!(GuestCount::from_str_lossy(count.as_str()), count);
        }
        assert_eq!(GuestCount::from_str_lossy("garbage"), GuestCount::One);
    }
}
