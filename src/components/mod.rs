//! UI components for the invitation page.
//!
//! One file per section or floating control, composed in page order by
//! `app::App`. Sections are presentational: content arrives as props and
//! each component owns only its local ephemeral state.

mod couple_section;
mod floating_nav;
mod footer;
mod gallery_section;
mod gift_modal;
mod hero_section;
mod music_control;
mod qr_code;
mod rsvp_modal;
mod venue_section;

pub use couple_section::CoupleSection;
pub use floating_nav::FloatingNav;
pub use footer::Footer;
pub use gallery_section::GallerySection;
pub use gift_modal::GiftModal;
pub use hero_section::HeroSection;
pub use music_control::MusicControl;
pub use qr_code::QrCodeDisplay;
pub use rsvp_modal::RsvpModal;
pub use venue_section::VenueSection;
