//! Shared numeric constants for the interactivity engine.

// ── Viewport ────────────────────────────────────────────────────

/// Widest viewport (CSS pixels) that still uses the banded narrow layout.
pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0;

// ── Dragging ────────────────────────────────────────────────────

/// Pointer displacement (pixels, per axis) at which a press becomes a drag
/// rather than a tap.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// First z-index handed out when a card is raised; every raise increments
/// from here so the most recently touched card always sits on top.
pub const TOP_Z_START: i64 = 10;

// ── Placement ───────────────────────────────────────────────────

/// Lowest cosmetic stacking value assigned at placement.
pub const PLACED_Z_MIN: i64 = 1;

/// Highest cosmetic stacking value assigned at placement.
pub const PLACED_Z_MAX: i64 = 5;

// ── Parallax ────────────────────────────────────────────────────

/// Activation margin (pixels) around card and stacked-blob scroll zones.
pub const ZONE_MARGIN_WIDE_PX: f64 = 200.0;

/// Activation margin (pixels) around the services blob zone.
pub const ZONE_MARGIN_TIGHT_PX: f64 = 100.0;

/// Pointer intensity for the hero blob: full deflection at the hero edge.
pub const HERO_POINTER_INTENSITY: f64 = 20.0;
