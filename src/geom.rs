#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured width × height of a layout container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether this rectangle intersects `other` once both are grown by
    /// `padding` on every side. Used by scatter placement so accepted cards
    /// keep a visible gutter between each other, not just non-overlap.
    #[must_use]
    pub fn intersects_padded(&self, other: &Self, padding: f64) -> bool {
        self.x < other.x + other.width + padding
            && self.x + self.width + padding > other.x
            && self.y < other.y + other.height + padding
            && self.y + self.height + padding > other.y
    }
}
