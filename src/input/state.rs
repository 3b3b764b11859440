//! Gesture state machine - unified state management for pointer interactions.
//!
//! A single explicit state machine replaces scattered boolean flags, making
//! impossible states unrepresentable: at most one gesture can hold the
//! pointer at any time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Pan          (pan button pressed)
//! Idle -> Zoom         (zoom button pressed)
//! Idle -> DragTactic   (drag button pressed on a tactic icon)
//!
//! Any  -> Idle         (owning button released - finalizes the gesture)
//! ```
//!
//! Claims are only honored from `Idle`. While a gesture is live its
//! accumulated delta is transient preview state; committing it into the
//! camera or world happens in `input::update` on release, after which the
//! state returns to `Idle` with the delta discarded.

use crate::geometry::Vec2;
use crate::types::TacticId;

/// Unified gesture state for all pointer interactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No active gesture
    #[default]
    Idle,

    /// Camera pan in progress
    Pan {
        /// Cursor position when the pan was claimed
        start: Vec2,
        /// Accumulated screen-space delta since `start`
        delta: Vec2,
    },

    /// Drag-to-zoom in progress
    Zoom {
        /// Cursor y at the last update, for per-frame deltas
        last_y: f32,
    },

    /// A tactic icon being dragged
    DragTactic {
        /// Tactic resolved once when the gesture was claimed
        id: TacticId,
        /// Cursor position when the drag was claimed
        start: Vec2,
        /// Accumulated screen-space delta since `start`
        delta: Vec2,
    },
}

impl Gesture {
    /// Returns true if no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the camera
    pub fn is_pan(&self) -> bool {
        matches!(self, Self::Pan { .. })
    }

    /// Returns true if currently drag-zooming
    pub fn is_zoom(&self) -> bool {
        matches!(self, Self::Zoom { .. })
    }

    /// Returns true if currently dragging a tactic
    pub fn is_drag_tactic(&self) -> bool {
        matches!(self, Self::DragTactic { .. })
    }

    /// Get the tactic being dragged, if any
    pub fn dragged_tactic(&self) -> Option<TacticId> {
        match self {
            Self::DragTactic { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Get the uncommitted pan delta, if panning
    pub fn pan_screen_delta(&self) -> Option<Vec2> {
        match self {
            Self::Pan { delta, .. } => Some(*delta),
            _ => None,
        }
    }

    /// Get the dragged tactic and its uncommitted screen delta, if dragging
    pub fn drag_preview(&self) -> Option<(TacticId, Vec2)> {
        match self {
            Self::DragTactic { id, delta, .. } => Some((*id, *delta)),
            _ => None,
        }
    }

    /// Claim the pointer for a pan. Refused unless idle.
    pub fn claim_pan(&mut self, start: Vec2) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Pan {
            start,
            delta: Vec2::ZERO,
        };
        true
    }

    /// Claim the pointer for a drag-zoom. Refused unless idle.
    pub fn claim_zoom(&mut self, cursor_y: f32) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Zoom { last_y: cursor_y };
        true
    }

    /// Claim the pointer for a tactic drag. Refused unless idle.
    pub fn claim_drag_tactic(&mut self, id: TacticId, start: Vec2) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::DragTactic {
            id,
            start,
            delta: Vec2::ZERO,
        };
        true
    }

    /// Refresh the pan delta from the current cursor. No-op outside `Pan`.
    pub fn update_pan(&mut self, cursor: Vec2) {
        if let Self::Pan { start, delta } = self {
            *delta = cursor - *start;
        }
    }

    /// Refresh the drag delta from the current cursor. No-op outside
    /// `DragTactic`.
    pub fn update_drag(&mut self, cursor: Vec2) {
        if let Self::DragTactic { start, delta, .. } = self {
            *delta = cursor - *start;
        }
    }

    /// Record the cursor y after a zoom step. No-op outside `Zoom`.
    pub fn update_zoom_anchor(&mut self, cursor_y: f32) {
        if let Self::Zoom { last_y } = self {
            *last_y = cursor_y;
        }
    }

    /// Reset to Idle, discarding any transient delta.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
