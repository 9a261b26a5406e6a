//! Placement engine: assigns every card an initial rectangle, base rotation,
//! and cosmetic stacking value.
//!
//! Two modes. Narrow viewports get banded placement: the container height is
//! split into one horizontal band per card, which guarantees vertical
//! distribution with purely random horizontal scatter (horizontal overlap
//! within a band is a visual feature, not a bug). Wide viewports get
//! rejection sampling: each card keeps drawing positions until it clears all
//! previously placed cards by a padding gutter, or its retry budget runs out
//! and the last sample is accepted as-is — bounded best effort, never an
//! error.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use rand::Rng;

use crate::card::SizeClass;
use crate::consts::{PLACED_Z_MAX, PLACED_Z_MIN};
use crate::geom::{Rect, Size};

/// Which placement mode applies, decided once from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Banded placement (phones / small tablets).
    Narrow,
    /// Scatter with overlap avoidance.
    Wide,
}

/// Parameters for banded narrow-viewport placement.
#[derive(Debug, Clone, Copy)]
pub struct BandedSpec {
    pub normal_width: f64,
    pub emphasized_width: f64,
    /// Card height as a fraction of its width.
    pub aspect: f64,
    /// Fraction of the card width allowed to overhang each horizontal edge.
    pub x_overhang: f64,
    /// Random rotation jitter, degrees either side of the palette angle.
    pub jitter: f64,
}

/// Parameters for wide-viewport scatter placement.
#[derive(Debug, Clone, Copy)]
pub struct ScatterSpec {
    pub normal_width: f64,
    pub emphasized_width: f64,
    /// Card height as a fraction of its width.
    pub aspect: f64,
    /// Fraction of the card width allowed to overhang each horizontal edge.
    pub x_overhang: f64,
    /// Fraction of the card height allowed to overhang the top edge.
    pub y_top_overhang: f64,
    /// Fraction of the card height that must remain above the bottom edge.
    pub y_bottom_visible: f64,
    /// Gutter kept between accepted cards, pixels on every side.
    pub padding: f64,
    /// Maximum placement attempts before the last sample is accepted anyway.
    pub retry_budget: u32,
    /// Random rotation jitter, degrees either side of the palette angle.
    pub jitter: f64,
}

/// Full placement profile for one card family.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub banded: BandedSpec,
    pub scatter: ScatterSpec,
    /// Cyclic base-rotation palette, indexed by placement order.
    pub rotations: &'static [f64],
    /// Parallax drift sampling ranges `(x, y)`: coefficients land in
    /// `±range/2` per axis.
    pub drift_range: (f64, f64),
}

/// Showcase cards (the portfolio section).
pub const SHOWCASE: Profile = Profile {
    banded: BandedSpec {
        normal_width: 220.0,
        emphasized_width: 280.0,
        aspect: 0.7,
        x_overhang: 0.15,
        jitter: 2.0,
    },
    scatter: ScatterSpec {
        normal_width: 420.0,
        emphasized_width: 560.0,
        aspect: 0.7,
        x_overhang: 0.25,
        y_top_overhang: 0.15,
        y_bottom_visible: 0.5,
        padding: 60.0,
        retry_budget: 100,
        jitter: 3.0,
    },
    rotations: &[-8.0, -5.0, -2.0, 0.0, 2.0, 5.0, 8.0],
    drift_range: (120.0, 160.0),
};

/// Gallery cards (the case-study image field).
pub const GALLERY: Profile = Profile {
    banded: BandedSpec {
        normal_width: 240.0,
        emphasized_width: 300.0,
        aspect: 0.7,
        x_overhang: 0.10,
        jitter: 2.0,
    },
    scatter: ScatterSpec {
        normal_width: 400.0,
        emphasized_width: 520.0,
        aspect: 0.65,
        x_overhang: 0.15,
        y_top_overhang: 0.10,
        y_bottom_visible: 0.4,
        padding: 40.0,
        retry_budget: 120,
        jitter: 2.5,
    },
    rotations: &[-7.0, -4.0, -1.0, 1.0, 4.0, 7.0, -3.0, 3.0, -5.0],
    drift_range: (100.0, 140.0),
};

/// One card's placement output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left/top/width/height styling for the card.
    pub rect: Rect,
    /// Base rotation in degrees; assigned here, exactly once.
    pub base_rotation: f64,
    /// Cosmetic stacking value.
    pub z: i64,
}

/// Place every card. Runs once, at initialization, against the container
/// size measured at that instant; never re-runs on resize.
pub fn place(
    profile: &Profile,
    mode: ViewportMode,
    container: Size,
    sizes: &[SizeClass],
    rng: &mut impl Rng,
) -> Vec<Placement> {
    match mode {
        ViewportMode::Narrow => place_banded(profile, container, sizes, rng),
        ViewportMode::Wide => place_scatter(profile, container, sizes, rng),
    }
}

/// Decide the mode from the viewport width.
#[must_use]
pub fn mode_for_viewport(viewport_width: f64) -> ViewportMode {
    if viewport_width <= crate::consts::NARROW_VIEWPORT_MAX_PX {
        ViewportMode::Narrow
    } else {
        ViewportMode::Wide
    }
}

fn place_banded(
    profile: &Profile,
    container: Size,
    sizes: &[SizeClass],
    rng: &mut impl Rng,
) -> Vec<Placement> {
    let spec = profile.banded;
    let count = sizes.len();
    if count == 0 {
        return Vec::new();
    }
    let band_height = container.height / count as f64;

    sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let width = match size {
                SizeClass::Normal => spec.normal_width,
                SizeClass::Emphasized => spec.emphasized_width,
            };
            let height = width * spec.aspect;

            let min_x = -width * spec.x_overhang;
            let max_x = container.width - width * (1.0 - spec.x_overhang);
            let x = sample_range(rng, min_x, max_x);

            let band_top = i as f64 * band_height;
            let max_y = (band_top + band_height - height).max(band_top);
            let y = sample_range(rng, band_top, max_y);

            Placement {
                rect: Rect::new(x, y, width, height),
                base_rotation: palette_rotation(profile.rotations, i, spec.jitter, rng),
                z: rng.random_range(PLACED_Z_MIN..=PLACED_Z_MAX),
            }
        })
        .collect()
}

fn place_scatter(
    profile: &Profile,
    container: Size,
    sizes: &[SizeClass],
    rng: &mut impl Rng,
) -> Vec<Placement> {
    let spec = profile.scatter;
    let mut placed: Vec<Rect> = Vec::with_capacity(sizes.len());

    sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let width = match size {
                SizeClass::Normal => spec.normal_width,
                SizeClass::Emphasized => spec.emphasized_width,
            };
            let height = width * spec.aspect;

            let min_x = -width * spec.x_overhang;
            let max_x = container.width - width * (1.0 - spec.x_overhang);
            let min_y = -height * spec.y_top_overhang;
            let max_y = container.height - height * spec.y_bottom_visible;

            let mut attempts = 0;
            let rect = loop {
                let x = sample_range(rng, min_x, max_x);
                let y = sample_range(rng, min_y, max_y);
                let candidate = Rect::new(x, y, width, height);
                attempts += 1;

                let clear = !placed
                    .iter()
                    .any(|r| candidate.intersects_padded(r, spec.padding));
                if clear {
                    break candidate;
                }
                if attempts >= spec.retry_budget {
                    // Best-effort cap reached: keep the overlapping sample.
                    log::debug!("scatter placement budget exhausted for card {i}");
                    break candidate;
                }
            };
            placed.push(rect);

            Placement {
                rect,
                base_rotation: palette_rotation(profile.rotations, i, spec.jitter, rng),
                z: rng.random_range(PLACED_Z_MIN..=PLACED_Z_MAX),
            }
        })
        .collect()
}

/// Palette angle for placement index `i` plus uniform jitter in `±jitter`.
fn palette_rotation(rotations: &[f64], i: usize, jitter: f64, rng: &mut impl Rng) -> f64 {
    let base = rotations[i % rotations.len()];
    base + (rng.random::<f64>() * 2.0 - 1.0) * jitter
}

/// Uniform sample over `[min, max)`, degenerating to `min` when the range
/// is empty (tiny containers make some ranges collapse).
fn sample_range(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    if max > min { rng.random_range(min..max) } else { min }
}
