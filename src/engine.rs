//! Top-level engine for one interactive card region.
//!
//! `EngineCore` owns every piece of interactive state: the card set, the
//! single drag session, the panel selection, the lightbox, and the region's
//! scroll zone. It contains no browser types, so all behavior is testable
//! natively. Input handlers return [`Action`] values describing
//! the DOM mutations the host layer must perform.
//!
//! Data flows one way: placement writes initial transforms, the parallax
//! driver keeps overriding them each frame unless a card is pinned or mid-
//! drag, the drag controller overrides during a session and pins on commit,
//! and taps terminate in the panel or lightbox.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;

use crate::card::{CardId, CardKind, CardSet, Transform};
use crate::consts::TOP_Z_START;
use crate::drag::{DragEnd, DragState};
use crate::geom::{Point, Rect, Size};
use crate::layout::{self, Profile, ViewportMode};
use crate::lightbox::{LightboxKey, LightboxState};
use crate::panel::{PanelContent, PanelState};
use crate::parallax::{Drift, ScrollZone};

/// DOM mutations for the host to apply, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Write initial `left`/`top`/`width` styling, rotation, and z-index.
    Place { card: CardId, rect: Rect, rotation: f64, z: i64 },
    /// Write the card's transform (translate + rotate).
    SetTransform { card: CardId, transform: Transform },
    /// Write the card's z-index.
    SetZ { card: CardId, z: i64 },
    /// Add the dragging style to a card.
    DragStarted { card: CardId },
    /// Remove the dragging style from a card.
    DragEnded { card: CardId },
    /// Add the active (panel-owner) style to a card.
    ActivateCard { card: CardId },
    /// Remove the active style from a card.
    DeactivateCard { card: CardId },
    /// Fill and show the info panel.
    ShowPanel { content: PanelContent },
    /// Hide the info panel.
    HidePanel,
    /// Open the lightbox showing `card`, locking page scroll.
    OpenLightbox { card: CardId },
    /// Swap the lightbox image to `card`.
    ShowImage { card: CardId },
    /// Close the lightbox and restore page scroll.
    CloseLightbox,
}

/// Engine state for one interactive region; instantiate once per region.
pub struct EngineCore {
    cards: CardSet,
    drag: DragState,
    panel: PanelState,
    lightbox: Option<LightboxState>,
    zone: Option<ScrollZone>,
    profile: Profile,
    top_z: i64,
}

impl EngineCore {
    /// Create an engine over a card set with a family placement profile.
    #[must_use]
    pub fn new(cards: CardSet, profile: Profile) -> Self {
        Self {
            cards,
            drag: DragState::default(),
            panel: PanelState::new(),
            lightbox: None,
            zone: None,
            profile,
            top_z: TOP_Z_START,
        }
    }

    /// Set the region's scroll zone from measured section geometry.
    pub fn set_zone(&mut self, zone: ScrollZone) {
        self.zone = Some(zone);
    }

    // --- Placement ---

    /// Run the placement engine once over the measured container, assigning
    /// every card a rectangle, base rotation, stacking value, and parallax
    /// drift. Returns one [`Action::Place`] per card.
    pub fn init_layout(
        &mut self,
        mode: ViewportMode,
        container: Size,
        rng: &mut impl Rng,
    ) -> Vec<Action> {
        let placements = layout::place(&self.profile, mode, container, &self.cards.sizes(), rng);
        let (drift_x, drift_y) = self.profile.drift_range;

        let mut actions = Vec::with_capacity(placements.len());
        for ((id, card), placement) in self.cards.iter_mut().zip(placements) {
            card.rect = placement.rect;
            card.base_rotation = placement.base_rotation;
            card.z = placement.z;
            card.transform = Transform::new(0.0, 0.0, placement.base_rotation);
            card.drift = Drift::sample(drift_x, drift_y, rng);
            actions.push(Action::Place {
                card: id,
                rect: placement.rect,
                rotation: placement.base_rotation,
                z: placement.z,
            });
        }
        actions
    }

    // --- Parallax ---

    /// One frame of scroll parallax. Outside the zone's activation window
    /// this does nothing and prior transforms stay as applied. Pinned cards,
    /// the card in an active drag session, and the panel's active card are
    /// never written.
    pub fn parallax_frame(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<Action> {
        let Some(zone) = self.zone else {
            return Vec::new();
        };
        let Some(centered) = zone.centered_progress(scroll_y, viewport_height) else {
            return Vec::new();
        };

        let dragging = self.drag.active_card();
        let active = self.panel.active();
        let mut actions = Vec::new();
        for (id, card) in self.cards.iter_mut() {
            if card.pinned || dragging == Some(id) || active == Some(id) {
                continue;
            }
            let (dx, dy) = card.drift.offset(centered);
            card.transform = Transform::new(dx, dy, card.base_rotation);
            actions.push(Action::SetTransform { card: id, transform: card.transform });
        }
        actions
    }

    // --- Drag lifecycle ---

    /// Pointer-down on a card: start a session (if idle) and raise the card
    /// above everything seen so far.
    pub fn pointer_down(&mut self, id: CardId, at: Point) -> Vec<Action> {
        let Some(card) = self.cards.get(id) else {
            return Vec::new();
        };
        if !self.drag.begin(id, at, card.transform) {
            return Vec::new();
        }
        self.top_z += 1;
        let z = self.top_z;
        if let Some(card) = self.cards.get_mut(id) {
            card.z = z;
        }
        vec![Action::SetZ { card: id, z }, Action::DragStarted { card: id }]
    }

    /// Pointer-move: no-op while idle; otherwise render baseline + delta
    /// with rotation frozen.
    pub fn pointer_move(&mut self, at: Point) -> Vec<Action> {
        let Some(update) = self.drag.update(at) else {
            return Vec::new();
        };
        if let Some(card) = self.cards.get_mut(update.card) {
            card.transform = update.transform;
        }
        vec![Action::SetTransform { card: update.card, transform: update.transform }]
    }

    /// Pointer-up or pointer-cancel: either commit a drag (pinning the
    /// card) or treat the release as a tap and dispatch on the card kind.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        match self.drag.finish() {
            None => Vec::new(),
            Some(DragEnd::Commit { card: id }) => {
                if let Some(card) = self.cards.get_mut(id) {
                    card.pinned = true;
                }
                vec![Action::DragEnded { card: id }]
            }
            Some(DragEnd::Tap { card: id, baseline }) => {
                let mut actions = vec![Action::DragEnded { card: id }];
                // Sub-threshold wiggle must not stick.
                if let Some(card) = self.cards.get_mut(id) {
                    if card.transform != baseline {
                        card.transform = baseline;
                        actions.push(Action::SetTransform { card: id, transform: baseline });
                    }
                }
                actions.extend(self.tap(id));
                actions
            }
        }
    }

    fn tap(&mut self, id: CardId) -> Vec<Action> {
        let Some(card) = self.cards.get(id) else {
            return Vec::new();
        };
        match &card.kind {
            CardKind::Showcase(meta) => {
                // Untitled cards have nothing to show.
                if meta.title.is_none() {
                    return Vec::new();
                }
                let content = PanelContent::from_meta(meta);
                let mut actions = Vec::new();
                if let Some(previous) = self.panel.activate(id) {
                    actions.extend(self.restore_rotation(previous));
                    actions.push(Action::DeactivateCard { card: previous });
                }
                if let Some(card) = self.cards.get_mut(id) {
                    card.transform.rotation = 0.0;
                    actions.push(Action::ActivateCard { card: id });
                    actions.push(Action::SetTransform { card: id, transform: card.transform });
                }
                actions.push(Action::ShowPanel { content });
                actions
            }
            CardKind::Gallery => {
                let order = self.gallery_order();
                let Some(position) = order.iter().position(|&g| g == id) else {
                    return Vec::new();
                };
                let Some(state) = LightboxState::open(order.len(), position) else {
                    return Vec::new();
                };
                self.lightbox = Some(state);
                vec![Action::OpenLightbox { card: id }]
            }
        }
    }

    // --- Panel ---

    /// Dismiss the info panel (outside click, close button, or scroll),
    /// restoring the active card's base rotation.
    pub fn dismiss_panel(&mut self) -> Vec<Action> {
        let Some(id) = self.panel.dismiss() else {
            return Vec::new();
        };
        let mut actions = self.restore_rotation(id);
        actions.push(Action::DeactivateCard { card: id });
        actions.push(Action::HidePanel);
        actions
    }

    fn restore_rotation(&mut self, id: CardId) -> Vec<Action> {
        let Some(card) = self.cards.get_mut(id) else {
            return Vec::new();
        };
        card.transform.rotation = card.base_rotation;
        vec![Action::SetTransform { card: id, transform: card.transform }]
    }

    // --- Lightbox ---

    /// Step the lightbox by `direction` (−1 or +1), wrapping at both ends.
    pub fn lightbox_navigate(&mut self, direction: i64) -> Vec<Action> {
        let Some(state) = &mut self.lightbox else {
            return Vec::new();
        };
        let position = state.navigate(direction);
        match self.gallery_order().get(position) {
            Some(&card) => vec![Action::ShowImage { card }],
            None => Vec::new(),
        }
    }

    /// Close the lightbox and restore page scroll.
    pub fn close_lightbox(&mut self) -> Vec<Action> {
        if self.lightbox.take().is_some() {
            vec![Action::CloseLightbox]
        } else {
            Vec::new()
        }
    }

    /// Keyboard surface: only live while the lightbox is open.
    pub fn key_down(&mut self, key: &str) -> Vec<Action> {
        if self.lightbox.is_none() {
            return Vec::new();
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Close) => self.close_lightbox(),
            Some(LightboxKey::Prev) => self.lightbox_navigate(-1),
            Some(LightboxKey::Next) => self.lightbox_navigate(1),
            None => Vec::new(),
        }
    }

    // --- Queries ---

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.active_card().is_some()
    }

    /// Whether the info panel is showing.
    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel.active().is_some()
    }

    /// Whether the lightbox is open.
    #[must_use]
    pub fn lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// The card set (read-only).
    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Gallery card ids in document order — the lightbox sequence.
    #[must_use]
    pub fn gallery_order(&self) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|(_, card)| !card.is_showcase())
            .map(|(id, _)| id)
            .collect()
    }
}
