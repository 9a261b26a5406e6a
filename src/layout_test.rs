#![allow(clippy::float_cmp)]

use rand::SeedableRng as _;
use rand::rngs::SmallRng;

use super::*;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EED)
}

fn normals(count: usize) -> Vec<SizeClass> {
    vec![SizeClass::Normal; count]
}

// --- Mode selection ---

#[test]
fn narrow_viewport_selects_banded() {
    assert_eq!(mode_for_viewport(375.0), ViewportMode::Narrow);
    assert_eq!(mode_for_viewport(768.0), ViewportMode::Narrow);
}

#[test]
fn wide_viewport_selects_scatter() {
    assert_eq!(mode_for_viewport(769.0), ViewportMode::Wide);
    assert_eq!(mode_for_viewport(1920.0), ViewportMode::Wide);
}

// --- Banded placement ---

#[test]
fn banded_assigns_one_band_per_card() {
    let container = Size::new(390.0, 2000.0);
    let sizes = normals(5);
    let placements = place(&SHOWCASE, ViewportMode::Narrow, container, &sizes, &mut rng());
    assert_eq!(placements.len(), 5);

    let band_height = 2000.0 / 5.0;
    for (i, p) in placements.iter().enumerate() {
        let band_top = i as f64 * band_height;
        assert!(p.rect.y >= band_top, "card {i} above its band");
        assert!(
            p.rect.y <= band_top + band_height,
            "card {i} below its band"
        );
    }
}

#[test]
fn banded_uses_narrow_widths() {
    let container = Size::new(390.0, 1500.0);
    let sizes = vec![SizeClass::Normal, SizeClass::Emphasized];
    let placements = place(&SHOWCASE, ViewportMode::Narrow, container, &sizes, &mut rng());
    assert_eq!(placements[0].rect.width, 220.0);
    assert_eq!(placements[1].rect.width, 280.0);
}

#[test]
fn banded_height_follows_aspect() {
    let container = Size::new(390.0, 1500.0);
    let placements = place(&SHOWCASE, ViewportMode::Narrow, container, &normals(1), &mut rng());
    assert_eq!(placements[0].rect.height, 220.0 * 0.7);
}

#[test]
fn banded_x_allows_edge_overhang() {
    let container = Size::new(390.0, 3000.0);
    // Many samples; every x must stay within the overhang range.
    let placements = place(&SHOWCASE, ViewportMode::Narrow, container, &normals(30), &mut rng());
    for p in &placements {
        assert!(p.rect.x >= -220.0 * 0.15);
        assert!(p.rect.x <= 390.0 - 220.0 * 0.85);
    }
}

#[test]
fn banded_empty_input_places_nothing() {
    let container = Size::new(390.0, 1500.0);
    let placements = place(&SHOWCASE, ViewportMode::Narrow, container, &[], &mut rng());
    assert!(placements.is_empty());
}

// --- Scatter placement ---

#[test]
fn scatter_respects_padding_when_budget_holds() {
    // Two cards in a huge container: the budget cannot plausibly exhaust,
    // so the padded rectangles must be disjoint.
    let container = Size::new(4000.0, 3000.0);
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &normals(2), &mut rng());
    let a = placements[0].rect;
    let b = placements[1].rect;
    assert!(!a.intersects_padded(&b, SHOWCASE.scatter.padding));
}

#[test]
fn scatter_emphasized_cards_are_larger() {
    let container = Size::new(1200.0, 800.0);
    let sizes = vec![
        SizeClass::Normal,
        SizeClass::Emphasized,
        SizeClass::Normal,
        SizeClass::Normal,
        SizeClass::Normal,
    ];
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &sizes, &mut rng());
    assert_eq!(placements[1].rect.width, 560.0);
    for i in [0, 2, 3, 4] {
        assert_eq!(placements[i].rect.width, 420.0);
    }
}

#[test]
fn scatter_produces_distinct_positions() {
    let container = Size::new(1200.0, 800.0);
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &normals(5), &mut rng());
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            let a = placements[i].rect;
            let b = placements[j].rect;
            assert!(
                (a.x, a.y) != (b.x, b.y),
                "cards {i} and {j} share a position"
            );
        }
    }
}

#[test]
fn scatter_budget_exhaustion_still_places_every_card() {
    // A container far too small for this many padded cards: the retry
    // budget exhausts and overlapping placements are accepted, never
    // dropped.
    let container = Size::new(500.0, 400.0);
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &normals(12), &mut rng());
    assert_eq!(placements.len(), 12);
}

#[test]
fn scatter_gallery_uses_its_own_sizes() {
    let container = Size::new(1600.0, 1000.0);
    let sizes = vec![SizeClass::Normal, SizeClass::Emphasized];
    let placements = place(&GALLERY, ViewportMode::Wide, container, &sizes, &mut rng());
    assert_eq!(placements[0].rect.width, 400.0);
    assert_eq!(placements[0].rect.height, 400.0 * 0.65);
    assert_eq!(placements[1].rect.width, 520.0);
}

// --- Rotation and stacking ---

#[test]
fn rotations_stay_within_palette_plus_jitter() {
    let container = Size::new(2000.0, 1500.0);
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &normals(14), &mut rng());
    let palette = SHOWCASE.rotations;
    let jitter = SHOWCASE.scatter.jitter;
    for (i, p) in placements.iter().enumerate() {
        let base = palette[i % palette.len()];
        assert!(
            (p.base_rotation - base).abs() <= jitter,
            "card {i}: rotation {} too far from palette angle {base}",
            p.base_rotation
        );
    }
}

#[test]
fn rotation_palette_cycles_by_placement_order() {
    let container = Size::new(2000.0, 1500.0);
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &normals(8), &mut rng());
    // Card 7 wraps back to palette slot 0.
    let jitter = SHOWCASE.scatter.jitter;
    assert!((placements[7].base_rotation - SHOWCASE.rotations[0]).abs() <= jitter);
}

#[test]
fn z_values_are_within_cosmetic_range() {
    let container = Size::new(1200.0, 800.0);
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &normals(5), &mut rng());
    for p in &placements {
        assert!((1..=5).contains(&p.z), "z {} out of range", p.z);
    }
}

#[test]
fn same_seed_is_deterministic() {
    let container = Size::new(1200.0, 800.0);
    let a = place(&SHOWCASE, ViewportMode::Wide, container, &normals(5), &mut rng());
    let b = place(&SHOWCASE, ViewportMode::Wide, container, &normals(5), &mut rng());
    assert_eq!(a, b);
}

// --- Degenerate containers ---

#[test]
fn zero_size_container_degenerates_without_panic() {
    let container = Size::new(0.0, 0.0);
    let placements = place(&SHOWCASE, ViewportMode::Wide, container, &normals(3), &mut rng());
    assert_eq!(placements.len(), 3);
    let banded = place(&SHOWCASE, ViewportMode::Narrow, container, &normals(3), &mut rng());
    assert_eq!(banded.len(), 3);
}
