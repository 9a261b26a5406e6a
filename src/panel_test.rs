use super::*;

fn meta() -> ShowcaseMeta {
    ShowcaseMeta {
        title: Some("Nordic Cafe".to_owned()),
        description: None,
        link: Some("/work/cafe".to_owned()),
    }
}

// --- Content snapshot ---

#[test]
fn content_applies_fallbacks() {
    let content = PanelContent::from_meta(&meta());
    assert_eq!(content.title, "Nordic Cafe");
    assert_eq!(content.description, "");
    assert_eq!(content.link, "/work/cafe");
}

#[test]
fn content_from_empty_meta() {
    let content = PanelContent::from_meta(&ShowcaseMeta::default());
    assert_eq!(content.title, "");
    assert_eq!(content.link, "#");
}

// --- Selection state ---

#[test]
fn starts_with_no_active_card() {
    assert!(PanelState::new().active().is_none());
}

#[test]
fn activate_sets_active() {
    let mut state = PanelState::new();
    assert!(state.activate(3).is_none());
    assert_eq!(state.active(), Some(3));
}

#[test]
fn activate_returns_previous_card() {
    let mut state = PanelState::new();
    state.activate(1);
    assert_eq!(state.activate(4), Some(1));
    assert_eq!(state.active(), Some(4));
}

#[test]
fn reactivating_same_card_returns_none() {
    let mut state = PanelState::new();
    state.activate(2);
    assert!(state.activate(2).is_none());
    assert_eq!(state.active(), Some(2));
}

#[test]
fn dismiss_clears_and_returns_active() {
    let mut state = PanelState::new();
    state.activate(5);
    assert_eq!(state.dismiss(), Some(5));
    assert!(state.active().is_none());
}

#[test]
fn dismiss_when_empty_is_noop() {
    let mut state = PanelState::new();
    assert!(state.dismiss().is_none());
}
