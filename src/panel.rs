//! Info panel selection state for showcase cards.
//!
//! At most one card is "active" at a time. Activating a card flattens its
//! rendered rotation to zero and fills the panel with its metadata;
//! dismissing (outside click, close button, or any scroll) restores the base
//! rotation.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::card::{CardId, ShowcaseMeta};

/// Text content the host writes into the panel elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl PanelContent {
    /// Snapshot panel text from a card's metadata, applying the fallbacks.
    #[must_use]
    pub fn from_meta(meta: &ShowcaseMeta) -> Self {
        Self {
            title: meta.title().to_owned(),
            description: meta.description().to_owned(),
            link: meta.link().to_owned(),
        }
    }
}

/// Which showcase card, if any, currently owns the panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    active: Option<CardId>,
}

impl PanelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active card, if any.
    #[must_use]
    pub fn active(&self) -> Option<CardId> {
        self.active
    }

    /// Make `card` the active one. Returns the previously active card so
    /// the caller can restore its rotation. Re-activating the same card
    /// returns `None`.
    pub fn activate(&mut self, card: CardId) -> Option<CardId> {
        let previous = self.active.filter(|&p| p != card);
        self.active = Some(card);
        previous
    }

    /// Dismiss the panel, returning the card whose rotation needs restoring.
    pub fn dismiss(&mut self) -> Option<CardId> {
        self.active.take()
    }
}
