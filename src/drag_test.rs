#![allow(clippy::float_cmp)]

use super::*;

fn baseline() -> Transform {
    Transform::new(30.0, -12.0, 5.0)
}

fn started() -> DragState {
    let mut state = DragState::default();
    assert!(state.begin(2, Point::new(100.0, 100.0), baseline()));
    state
}

// --- Session lifecycle ---

#[test]
fn default_is_idle() {
    let state = DragState::default();
    assert!(state.active_card().is_none());
}

#[test]
fn begin_activates_session() {
    let state = started();
    assert_eq!(state.active_card(), Some(2));
}

#[test]
fn begin_while_active_is_rejected() {
    let mut state = started();
    assert!(!state.begin(7, Point::new(0.0, 0.0), Transform::default()));
    // The original session is untouched.
    assert_eq!(state.active_card(), Some(2));
    let update = state.update(Point::new(110.0, 100.0));
    assert!(update.is_some_and(|u| u.card == 2 && u.transform.x == 40.0));
}

#[test]
fn update_while_idle_is_noop() {
    let mut state = DragState::default();
    assert!(state.update(Point::new(50.0, 50.0)).is_none());
}

#[test]
fn finish_while_idle_is_noop() {
    let mut state = DragState::default();
    assert!(state.finish().is_none());
}

#[test]
fn finish_returns_to_idle() {
    let mut state = started();
    state.finish();
    assert!(state.active_card().is_none());
    // A new session can start now.
    assert!(state.begin(0, Point::new(0.0, 0.0), Transform::default()));
}

// --- Transform while dragging ---

#[test]
fn update_applies_delta_over_baseline() {
    let mut state = started();
    let update = state.update(Point::new(130.0, 80.0));
    let Some(update) = update else {
        unreachable!("session is active")
    };
    assert_eq!(update.transform.x, 60.0);
    assert_eq!(update.transform.y, -32.0);
}

#[test]
fn rotation_is_frozen_at_baseline_during_drag() {
    let mut state = started();
    let update = state.update(Point::new(400.0, 400.0));
    assert!(update.is_some_and(|u| u.transform.rotation == 5.0));
}

// --- Tap versus drag ---

#[test]
fn sub_threshold_release_is_a_tap() {
    let mut state = started();
    state.update(Point::new(104.9, 100.0));
    state.update(Point::new(100.0, 104.9));
    assert!(matches!(state.finish(), Some(DragEnd::Tap { card: 2, .. })));
}

#[test]
fn release_without_any_move_is_a_tap() {
    let mut state = started();
    assert!(matches!(state.finish(), Some(DragEnd::Tap { card: 2, .. })));
}

#[test]
fn threshold_displacement_commits() {
    let mut state = started();
    state.update(Point::new(105.0, 100.0));
    assert_eq!(state.finish(), Some(DragEnd::Commit { card: 2 }));
}

#[test]
fn y_axis_alone_can_commit() {
    let mut state = started();
    state.update(Point::new(100.0, 112.0));
    assert_eq!(state.finish(), Some(DragEnd::Commit { card: 2 }));
}

#[test]
fn moved_flag_is_sticky() {
    // Drag out past the threshold and back to the origin: still a drag.
    let mut state = started();
    state.update(Point::new(150.0, 150.0));
    state.update(Point::new(100.0, 100.0));
    assert_eq!(state.finish(), Some(DragEnd::Commit { card: 2 }));
}

#[test]
fn negative_deltas_count_toward_threshold() {
    let mut state = started();
    state.update(Point::new(92.0, 100.0));
    assert_eq!(state.finish(), Some(DragEnd::Commit { card: 2 }));
}
