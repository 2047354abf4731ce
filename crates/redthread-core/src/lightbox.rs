//! Lightbox selection over the photo wall.
//!
//! The lightbox tracks "currently open photo index or none" over the fixed,
//! ordered gallery list. Navigation wraps around at both ends and is a no-op
//! while the lightbox is closed. The selection is always either none or a
//! valid index into the gallery; no operation panics.

/// Lightbox navigator over a gallery of `len` photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
}

impl Lightbox {
    /// Create a closed lightbox over a gallery of `len` photos.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    /// Open the lightbox at `index`.
    ///
    /// Returns false and leaves the selection untouched if `index` is out of
    /// range - the valid-selection invariant outranks the caller.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Close the lightbox unconditionally.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Advance to the next photo, wrapping from the last back to the first.
    /// No-op while closed.
    pub fn next(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some((current + 1) % self.len);
        }
    }

    /// Step to the previous photo, wrapping from the first to the last.
    /// No-op while closed.
    pub fn prev(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some(if current == 0 {
                self.len - 1
            } else {
                current - 1
            });
        }
    }

    /// Currently selected photo index, if the lightbox is open.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Photo count the navigator was built over.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// "n / N" counter label for the open photo.
    pub fn counter_label(&self) -> Option<String> {
        self.selected.map(|i| format!("{} / {}", i + 1, self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_yields_none() {
        let mut lightbox = Lightbox::new(11);
        for i in 0..11 {
            assert!(lightbox.open(i));
            lightbox.close();
            assert_eq!(lightbox.selected(), None);
        }
    }

    #[test]
    fn test_open_out_of_range_is_rejected() {
        let mut lightbox = Lightbox::new(3);
        assert!(!lightbox.open(3));
        assert_eq!(lightbox.selected(), None);

        // An existing valid selection survives a bad open
        assert!(lightbox.open(1));
        assert!(!lightbox.open(99));
        assert_eq!(lightbox.selected(), Some(1));
    }

    #[test]
    fn test_next_wraps_at_end() {
        let mut lightbox = Lightbox::new(11);
        lightbox.open(10);
        lightbox.next();
        assert_eq!(lightbox.selected(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.selected(), Some(10));
    }

    #[test]
    fn test_prev_wraps_at_start() {
        let mut lightbox = Lightbox::new(5);
        lightbox.open(0);
        lightbox.prev();
        assert_eq!(lightbox.selected(), Some(4));
    }

    #[test]
    fn test_navigation_noop_while_closed() {
        let mut lightbox = Lightbox::new(5);
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.selected(), None);
    }

    #[test]
    fn test_empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0);
        assert!(!lightbox.open(0));
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.selected(), None);
        assert!(lightbox.is_empty());
    }

    #[test]
    fn test_counter_label() {
        let mut lightbox = Lightbox::new(11);
        assert_eq!(lightbox.counter_label(), None);
        lightbox.open(0);
        assert_eq!(lightbox.counter_label().as_deref(), Some("1 / 11"));
        lightbox.prev();
        assert_eq!(lightbox.counter_label().as_deref(), Some("11 / 11"));
    }
}
