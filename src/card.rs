//! Card model: the positionable visual items the engine animates.
//!
//! A card is either a showcase card (carries project metadata for the info
//! panel) or a gallery card (opens the lightbox). Placement writes its
//! initial rectangle, base rotation, and stacking value exactly once; after
//! that the current transform record is the single source of truth for where
//! the card is rendered — nothing ever re-parses a rendered style string.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::geom::Rect;
use crate::parallax::Drift;

/// Stable identity of a card: its index in document order.
pub type CardId = usize;

/// Size variant from the markup contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeClass {
    /// Regular card.
    #[default]
    Normal,
    /// Larger card (the markup's `--large` / `--wide` modifier).
    Emphasized,
}

/// Project metadata carried by showcase cards, sourced from data attributes.
///
/// Fields are optional on the wire; accessors fall back to empty strings and
/// a `#` link so missing markup degrades instead of failing.
#[derive(Debug, Clone, Default)]
pub struct ShowcaseMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl ShowcaseMeta {
    /// Project title. Empty string when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Project description. Empty string when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Outbound link. `"#"` when absent.
    #[must_use]
    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }
}

/// What tapping a card does: showcase cards open the info panel, gallery
/// cards open the lightbox.
#[derive(Debug, Clone)]
pub enum CardKind {
    Showcase(ShowcaseMeta),
    Gallery,
}

/// Current rendered transform: translate offset in pixels plus rotation in
/// degrees. Updated by whichever component owns the card at the time
/// (placement, parallax, or an active drag).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl Transform {
    #[must_use]
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }
}

/// A positionable card and all per-card state the engine tracks.
#[derive(Debug, Clone)]
pub struct Card {
    /// Tap behavior and (for showcase cards) panel metadata.
    pub kind: CardKind,
    /// Size variant from the markup.
    pub size: SizeClass,
    /// Initial placement rectangle (left/top/width/height styling).
    pub rect: Rect,
    /// Rotation assigned at placement; reused by every later render.
    pub base_rotation: f64,
    /// Current transform record.
    pub transform: Transform,
    /// Per-axis parallax speed coefficients, sampled once at placement.
    pub drift: Drift,
    /// Stacking order.
    pub z: i64,
    /// Set once the user commits a drag; the parallax driver must never
    /// write this card's transform again.
    pub pinned: bool,
}

impl Card {
    /// A card before placement: everything zeroed except kind and size.
    #[must_use]
    pub fn new(kind: CardKind, size: SizeClass) -> Self {
        Self {
            kind,
            size,
            rect: Rect::default(),
            base_rotation: 0.0,
            transform: Transform::default(),
            drift: Drift::default(),
            z: 0,
            pinned: false,
        }
    }

    /// Whether this card carries showcase metadata.
    #[must_use]
    pub fn is_showcase(&self) -> bool {
        matches!(self.kind, CardKind::Showcase(_))
    }
}

/// The ordered set of cards for one interactive region. Order is document
/// order and doubles as the lightbox sequence for gallery cards.
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build a set from `(kind, size)` pairs in document order.
    #[must_use]
    pub fn from_kinds(kinds: Vec<(CardKind, SizeClass)>) -> Self {
        Self { cards: kinds.into_iter().map(|(k, s)| Card::new(k, s)).collect() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards.iter().enumerate()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CardId, &mut Card)> {
        self.cards.iter_mut().enumerate()
    }

    /// Size variants in document order, as placement input.
    #[must_use]
    pub fn sizes(&self) -> Vec<SizeClass> {
        self.cards.iter().map(|c| c.size).collect()
    }

    /// Number of cards in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the set contains no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
