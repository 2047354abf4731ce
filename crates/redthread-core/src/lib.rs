//! Red Thread Core Library
//!
//! State model and content for a single-page wedding invitation.
//!
//! ## Overview
//!
//! The invitation page is built from one immutable content record plus a
//! handful of small, independently owned state machines: scroll-reveal
//! latches, the gallery lightbox, the RSVP form with its fire-and-forget
//! submission, overlay visibility flags, and the toggleable music/copy
//! controls with auto-expiring feedback. This crate holds all of that as
//! plain, UI-free types; the desktop front-end owns one instance of each
//! machine and renders from it.
//!
//! ## Design constraints
//!
//! - Content is constructed once and never mutated.
//! - Each mutable machine has exactly one owner component; cross-component
//!   effects happen through callbacks, never shared mutable state.
//! - Nothing here persists: all state is scoped to a single run.
//! - No operation panics on user input; failures degrade to "no visible
//!   change" or a retry-able state.

pub mod content;
pub mod dispatch;
pub mod error;
pub mod lightbox;
pub mod overlay;
pub mod reveal;
pub mod rsvp;
pub mod toggle;

// Re-exports
pub use content::{BankAccount, PerSide, Person, Photo, Side, Venue, WeddingContent};
pub use dispatch::{Dispatched, RsvpClient, RsvpPayload};
pub use error::{SiteError, SiteResult};
pub use lightbox::Lightbox;
pub use overlay::{OverlayKind, Overlays};
pub use reveal::RevealLatch;
pub use rsvp::{GuestCount, RsvpDraft, RsvpForm, SubmitPhase};
pub use toggle::{
    AudioControl, CopyFeedback, ExpiringState, PlaybackCommand, PlaybackState, ResetToken, Toggle,
};
