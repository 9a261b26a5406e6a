//! Scroll-parallax math: zones, activation windows, progress mapping, and
//! the per-element offset coefficients applied on each frame.
//!
//! Everything here is pure. The host layer owns the per-zone
//! frame-coalescing flag and calls into this module (via the engine) at most
//! once per rendered frame per zone.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use rand::Rng;

/// A named scroll range: a section's top offset and height, measured once
/// at initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollZone {
    /// Document-space top of the section in pixels.
    pub top: f64,
    /// Section height in pixels.
    pub height: f64,
    /// Extra activation slack above and below the section.
    pub margin: f64,
}

impl ScrollZone {
    #[must_use]
    pub fn new(top: f64, height: f64, margin: f64) -> Self {
        Self { top, height, margin }
    }

    /// Whether the zone is within its activation window for this scroll
    /// position. Outside the window no transform is recomputed and the
    /// last-applied values stay untouched.
    #[must_use]
    pub fn is_active(&self, scroll_y: f64, viewport_height: f64) -> bool {
        scroll_y + viewport_height > self.top - self.margin
            && scroll_y < self.top + self.height + self.margin
    }

    /// Linear progress through the zone: 0.0 when the section's top reaches
    /// the bottom of the viewport, 1.0 when scroll passes its bottom edge.
    #[must_use]
    pub fn progress(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        let start = self.top - viewport_height;
        let end = self.top + self.height;
        (scroll_y - start) / (end - start)
    }

    /// Centered progress (`progress − 0.5`) while the zone is active,
    /// `None` while it idles. Centered form keeps effects symmetric and
    /// near-zero when the section sits mid-viewport.
    #[must_use]
    pub fn centered_progress(&self, scroll_y: f64, viewport_height: f64) -> Option<f64> {
        self.is_active(scroll_y, viewport_height)
            .then(|| self.progress(scroll_y, viewport_height) - 0.5)
    }
}

/// Per-card parallax speed coefficients, assigned once at placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drift {
    pub x: f64,
    pub y: f64,
}

impl Drift {
    /// Sample a drift uniformly in `±range_x/2` × `±range_y/2`.
    pub fn sample(range_x: f64, range_y: f64, rng: &mut impl Rng) -> Self {
        Self {
            x: (rng.random::<f64>() - 0.5) * range_x,
            y: (rng.random::<f64>() - 0.5) * range_y,
        }
    }

    /// Translate offset for a centered progress value.
    #[must_use]
    pub fn offset(&self, centered: f64) -> (f64, f64) {
        (centered * self.x, centered * self.y)
    }
}

/// Hand-tuned scroll response of one decorative blob: translate and rotate
/// per unit of centered progress, plus a fixed base rotation some blobs
/// carry in their resting style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobEffect {
    /// Horizontal travel at centered progress 1.0.
    pub dx: f64,
    /// Vertical travel at centered progress 1.0.
    pub dy: f64,
    /// Rotation (degrees) at centered progress 1.0.
    pub rotate: f64,
    /// Constant rotation applied regardless of scroll.
    pub base_rotation: f64,
}

impl BlobEffect {
    /// Offsets `(dx, dy, rotation)` at a given centered progress.
    #[must_use]
    pub fn at(&self, centered: f64) -> (f64, f64, f64) {
        (
            centered * self.dx,
            centered * self.dy,
            self.base_rotation + centered * self.rotate,
        )
    }
}

// Blob presets. The travel numbers come from the site design; they are not
// derived from anything.

/// Services section, blue blob.
pub const SERVICES_BLUE: BlobEffect = BlobEffect { dx: 0.0, dy: -200.0, rotate: 10.0, base_rotation: 0.0 };

/// Services section, yellow blob.
pub const SERVICES_YELLOW: BlobEffect = BlobEffect { dx: 50.0, dy: -300.0, rotate: 0.0, base_rotation: 0.0 };

/// Backdrop blob behind the showcase card field.
pub const SHOWCASE_BACKDROP: BlobEffect = BlobEffect { dx: 0.0, dy: -100.0, rotate: 0.0, base_rotation: -10.0 };

/// Call-to-action section blob.
pub const CTA_BLOB: BlobEffect = BlobEffect { dx: 0.0, dy: -120.0, rotate: 8.0, base_rotation: 0.0 };

/// The three stacked blobs on the services page, top to bottom.
pub const SERVICES_STACK: [BlobEffect; 3] = [
    BlobEffect { dx: 60.0, dy: -80.0, rotate: 5.0, base_rotation: 0.0 },
    BlobEffect { dx: -90.0, dy: 140.0, rotate: -12.0, base_rotation: 0.0 },
    BlobEffect { dx: 45.0, dy: -200.0, rotate: 15.0, base_rotation: 0.0 },
];

/// Pointer deflection for the hero blob: maps a pointer position within the
/// hero's bounding box to `±intensity` pixels on each axis, zero at center.
#[must_use]
pub fn hero_pointer_deflection(
    pointer_x: f64,
    pointer_y: f64,
    hero_width: f64,
    hero_height: f64,
    intensity: f64,
) -> (f64, f64) {
    let center_x = hero_width / 2.0;
    let center_y = hero_height / 2.0;
    if center_x <= 0.0 || center_y <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (pointer_x - center_x) / center_x * intensity,
        (pointer_y - center_y) / center_y * intensity,
    )
}

/// Combined hero blob transform: pointer deflection on X, pointer plus a
/// half-speed scroll lag on Y, rotation blended from both inputs.
#[must_use]
pub fn hero_transform(mouse_x: f64, mouse_y: f64, scroll_y: f64) -> (f64, f64, f64) {
    let rotation = mouse_x * 0.1 + scroll_y * 0.02;
    (mouse_x, mouse_y + scroll_y * 0.5, rotation)
}
