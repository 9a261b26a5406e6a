use super::*;

// --- Opening ---

#[test]
fn open_at_valid_index() {
    let state = LightboxState::open(4, 2);
    assert!(state.is_some_and(|s| s.index() == 2));
}

#[test]
fn open_rejects_out_of_range_index() {
    assert!(LightboxState::open(4, 4).is_none());
}

#[test]
fn open_rejects_empty_set() {
    assert!(LightboxState::open(0, 0).is_none());
}

// --- Navigation ---

#[test]
fn forward_steps_by_one() {
    let Some(mut state) = LightboxState::open(5, 1) else {
        unreachable!("index in range")
    };
    assert_eq!(state.navigate(1), 2);
}

#[test]
fn backward_steps_by_one() {
    let Some(mut state) = LightboxState::open(5, 3) else {
        unreachable!("index in range")
    };
    assert_eq!(state.navigate(-1), 2);
}

#[test]
fn backward_from_zero_wraps_to_last() {
    let Some(mut state) = LightboxState::open(6, 0) else {
        unreachable!("index in range")
    };
    assert_eq!(state.navigate(-1), 5);
}

#[test]
fn forward_from_last_wraps_to_zero() {
    let Some(mut state) = LightboxState::open(6, 5) else {
        unreachable!("index in range")
    };
    assert_eq!(state.navigate(1), 0);
}

#[test]
fn single_item_always_wraps_to_itself() {
    let Some(mut state) = LightboxState::open(1, 0) else {
        unreachable!("index in range")
    };
    assert_eq!(state.navigate(1), 0);
    assert_eq!(state.navigate(-1), 0);
}

#[test]
fn full_cycle_returns_to_start() {
    let Some(mut state) = LightboxState::open(3, 1) else {
        unreachable!("index in range")
    };
    state.navigate(1);
    state.navigate(1);
    state.navigate(1);
    assert_eq!(state.index(), 1);
}

// --- Keyboard mapping ---

#[test]
fn escape_maps_to_close() {
    assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Close));
}

#[test]
fn arrows_map_to_navigation() {
    assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::Prev));
    assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::Next));
}

#[test]
fn other_keys_are_ignored() {
    assert!(LightboxKey::from_key("Enter").is_none());
    assert!(LightboxKey::from_key("a").is_none());
}
