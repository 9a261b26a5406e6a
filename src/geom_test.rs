#![allow(clippy::float_cmp)]

use super::*;

// --- Point / Size ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn size_new() {
    let s = Size::new(1200.0, 800.0);
    assert_eq!(s.width, 1200.0);
    assert_eq!(s.height, 800.0);
}

// --- Rect overlap ---

#[test]
fn disjoint_rects_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 100.0, 70.0);
    let b = Rect::new(500.0, 500.0, 100.0, 70.0);
    assert!(!a.intersects_padded(&b, 0.0));
}

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0.0, 0.0, 100.0, 70.0);
    let b = Rect::new(50.0, 30.0, 100.0, 70.0);
    assert!(a.intersects_padded(&b, 0.0));
}

#[test]
fn intersection_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 100.0, 70.0);
    let b = Rect::new(90.0, 0.0, 100.0, 70.0);
    assert_eq!(a.intersects_padded(&b, 0.0), b.intersects_padded(&a, 0.0));
}

#[test]
fn padding_expands_the_test() {
    let a = Rect::new(0.0, 0.0, 100.0, 70.0);
    // 30px gap on the x axis.
    let b = Rect::new(130.0, 0.0, 100.0, 70.0);
    assert!(!a.intersects_padded(&b, 0.0));
    assert!(a.intersects_padded(&b, 40.0));
}

#[test]
fn touching_edges_do_not_intersect_without_padding() {
    let a = Rect::new(0.0, 0.0, 100.0, 70.0);
    let b = Rect::new(100.0, 0.0, 100.0, 70.0);
    assert!(!a.intersects_padded(&b, 0.0));
}

#[test]
fn rect_contained_in_other_intersects() {
    let outer = Rect::new(0.0, 0.0, 400.0, 300.0);
    let inner = Rect::new(100.0, 100.0, 50.0, 40.0);
    assert!(outer.intersects_padded(&inner, 0.0));
}

#[test]
fn negative_coordinates_work() {
    let a = Rect::new(-50.0, -30.0, 100.0, 70.0);
    let b = Rect::new(0.0, 0.0, 100.0, 70.0);
    assert!(a.intersects_padded(&b, 0.0));
}
