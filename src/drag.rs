//! Drag controller: the single-session pointer gesture state machine.
//!
//! One session at most exists at any time, spanning pointer-down to
//! pointer-up/cancel. The session carries the pointer origin and the card's
//! transform at session start; tap versus drag is decided post-hoc from
//! whether the pointer ever left a fixed threshold box around the origin.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::card::{CardId, Transform};
use crate::consts::DRAG_THRESHOLD_PX;
use crate::geom::Point;

/// The drag state machine: idle, or one active session.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No session; waiting for the next pointer-down.
    #[default]
    Idle,
    /// An active session between pointer-down and pointer-up/cancel.
    Dragging {
        /// The card being dragged.
        card: CardId,
        /// Pointer position at session start.
        origin: Point,
        /// The card's transform at session start; deltas apply on top of it
        /// and rotation stays frozen at its angle for the whole session.
        baseline: Transform,
        /// Whether the pointer ever moved past the tap threshold.
        moved: bool,
    },
}

/// A transform to apply to the dragged card after a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub card: CardId,
    pub transform: Transform,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEnd {
    /// The pointer never left the threshold box: a tap. The carried
    /// baseline lets the caller restore the position exactly as it was at
    /// session start (sub-threshold wiggle must not stick).
    Tap { card: CardId, baseline: Transform },
    /// A real drag: the moved position is committed and the card becomes
    /// pinned (excluded from parallax from now on).
    Commit { card: CardId },
}

impl DragState {
    /// The card owned by the active session, if any.
    #[must_use]
    pub fn active_card(&self) -> Option<CardId> {
        match self {
            Self::Idle => None,
            Self::Dragging { card, .. } => Some(*card),
        }
    }

    /// Start a session. Returns `false` (and leaves the current session
    /// untouched) if one is already active: a stray pointer-down on a second
    /// card must not corrupt the active baseline.
    pub fn begin(&mut self, card: CardId, origin: Point, baseline: Transform) -> bool {
        if matches!(self, Self::Dragging { .. }) {
            return false;
        }
        *self = Self::Dragging { card, origin, baseline, moved: false };
        true
    }

    /// Feed a pointer move. No-ops while idle. Marks the session moved once
    /// either axis delta reaches the threshold, and returns the transform to
    /// render: baseline translate plus delta, rotation frozen at baseline.
    pub fn update(&mut self, at: Point) -> Option<DragUpdate> {
        let Self::Dragging { card, origin, baseline, moved } = self else {
            return None;
        };
        let dx = at.x - origin.x;
        let dy = at.y - origin.y;
        if dx.abs() >= DRAG_THRESHOLD_PX || dy.abs() >= DRAG_THRESHOLD_PX {
            *moved = true;
        }
        Some(DragUpdate {
            card: *card,
            transform: Transform::new(baseline.x + dx, baseline.y + dy, baseline.rotation),
        })
    }

    /// End the session (pointer-up and pointer-cancel both land here).
    /// No-ops while idle.
    pub fn finish(&mut self) -> Option<DragEnd> {
        let Self::Dragging { card, baseline, moved, .. } = *self else {
            return None;
        };
        *self = Self::Idle;
        Some(if moved {
            DragEnd::Commit { card }
        } else {
            DragEnd::Tap { card, baseline }
        })
    }
}
