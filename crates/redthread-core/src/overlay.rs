//! Overlay visibility flags.
//!
//! The RSVP and gift panels are two independently open/closeable overlays.
//! They are deliberately independent flags rather than an exclusive stack:
//! opening one does not close the other.

/// The two overlays of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Rsvp,
    Gift,
}

/// Visibility of both overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    rsvp: bool,
    gift: bool,
}

impl Overlays {
    pub fn open(&mut self, kind: OverlayKind) {
        match kind {
            OverlayKind::Rsvp => self.rsvp = true,
            OverlayKind::Gift => self.gift = true,
        }
    }

    pub fn close(&mut self, kind: OverlayKind) {
        match kind {
            OverlayKind::Rsvp => self.rsvp = false,
            OverlayKind::Gift => self.gift = false,
        }
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Rsvp => self.rsvp,
            OverlayKind::Gift => self.gift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlays_start_closed() {
        let overlays = Overlays::default();
        assert!(!overlays.is_open(OverlayKind::Rsvp));
        assert!(!overlays.is_open(OverlayKind::Gift));
    }

    #[test]
    fn test_open_close_is_idempotent() {
        let mut overlays = Overlays::default();
        overlays.open(OverlayKind::Rsvp);
        overlays.open(OverlayKind::Rsvp);
        assert!(overlays.is_open(OverlayKind::Rsvp));
        overlays.close(OverlayKind::Rsvp);
        overlays.close(OverlayKind::Rsvp);
        assert!(!overlays.is_open(OverlayKind::Rsvp));
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut overlays = Overlays::default();
        overlays.open(OverlayKind::Rsvp);
        overlays.open(OverlayKind::Gift);
        assert!(overlays.is_open(OverlayKind::Rsvp));
        assert!(overlays.is_open(OverlayKind::Gift));

        overlays.close(OverlayKind::Rsvp);
        assert!(overlays.is_open(OverlayKind::Gift));
    }
}
