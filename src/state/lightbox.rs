/// Lightbox navigation state
///
/// Tracks which photo of the filtered sequence is shown full-size.
/// The navigator never wraps: stepping past either end is a no-op.
/// It does not own the sequence, so every operation that depends on
/// bounds takes the current filtered length.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    /// Index into the filtered sequence
    Open(usize),
}

impl Lightbox {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Show the photo at `index`. Rejected (state unchanged) when the
    /// index is outside the filtered sequence.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            debug!(index, len, "ignoring lightbox open past the end");
            return false;
        }

        *self = Self::Open(index);
        true
    }

    pub fn next(&mut self, len: usize) {
        if let Self::Open(index) = *self {
            if index + 1 < len {
                *self = Self::Open(index + 1);
            }
        }
    }

    pub fn previous(&mut self) {
        if let Self::Open(index) = *self {
            if index > 0 {
                *self = Self::Open(index - 1);
            }
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Re-check the open index after the filtered sequence changed length.
    /// Closes the lightbox when the index no longer points at a photo.
    pub fn reconcile(&mut self, len: usize) {
        if let Self::Open(index) = *self {
            if index >= len {
                debug!(index, len, "closing lightbox, filtered sequence shrank");
                *self = Self::Closed;
            }
        }
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Open(index) => Some(index),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.index().is_some_and(|index| index + 1 < len)
    }

    pub fn has_previous(&self) -> bool {
        self.index().is_some_and(|index| index > 0)
    }

    /// Page scrolling is suspended for as long as a photo is shown
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}
