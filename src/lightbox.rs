//! Full-screen lightbox: wrapping index navigation over the ordered set of
//! gallery cards, plus the keyboard surface.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// What a key press means while the lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    /// Escape.
    Close,
    /// ArrowLeft.
    Prev,
    /// ArrowRight.
    Next,
}

impl LightboxKey {
    /// Map a browser key name to a lightbox command.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Viewer state; exists only while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxState {
    count: usize,
    index: usize,
}

impl LightboxState {
    /// Open over `count` gallery cards at `index`. `None` when the set is
    /// empty or the index is out of range.
    #[must_use]
    pub fn open(count: usize, index: usize) -> Option<Self> {
        (index < count).then_some(Self { count, index })
    }

    /// The currently displayed card index. Always in `[0, count)`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step the index by `direction` (−1 or +1), wrapping at both ends.
    /// Returns the new index.
    pub fn navigate(&mut self, direction: i64) -> usize {
        let count = self.count as i64;
        let next = (self.index as i64 + direction).rem_euclid(count);
        self.index = next as usize;
        self.index
    }
}
