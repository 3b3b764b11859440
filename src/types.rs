//! Core types for the tactical view.
//!
//! This module defines the entities the view renders: agents (units reported
//! by the simulation) and tactics (draggable waypoint markers), plus the
//! stable identifiers the world store hands out for them.

use crate::color::Color;
use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier for an agent, assigned by the world store on insert.
///
/// Identity is carried by the id, never by the display name; two agents may
/// share a name and remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(u64);

impl AgentId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Stable identifier for a tactic, assigned by the world store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TacticId(u64);

impl TacticId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

// ============================================================================
// Agents
// ============================================================================

/// A unit on the map. Agents are owned by the simulation; the view only
/// draws them and never moves them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Display name drawn below the icon
    pub name: String,
    /// Airborne agents render as triangles, ground agents as squares
    pub air: bool,
    /// Dead agents keep rendering, in the dead color, until removed
    pub dead: bool,
    /// Position in world units
    pub pos: Vec2,
    /// Icon and label color
    pub color: Color,
}

impl Agent {
    /// Color for agents that are alive and untasked
    pub const ALIVE_COLOR: Color = Color::GREEN;
    /// Color for dead agents
    pub const DEAD_COLOR: Color = Color::RED;
    /// Color for agents currently executing a tactic
    pub const TASKED_COLOR: Color = Color::rgb(3, 252, 236);

    pub fn new(name: impl Into<String>, air: bool, pos: Vec2) -> Self {
        Self {
            name: name.into(),
            air,
            dead: false,
            pos,
            color: Self::ALIVE_COLOR,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

// ============================================================================
// Tactics
// ============================================================================

/// A waypoint marker. Tactics are the only entities the user can move
/// directly, by dragging their icon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tactic {
    /// Display name drawn centered on the icon
    pub name: String,
    /// Position in world units
    pub pos: Vec2,
    /// Icon and label color
    pub color: Color,
}

impl Tactic {
    /// Color for completed tactics
    pub const COMPLETE_COLOR: Color = Color::GREEN;
    /// Color for failed tactics
    pub const FAILED_COLOR: Color = Color::RED;
    /// Color for tactics still in progress
    pub const WIP_COLOR: Color = Color::WHITE;

    pub fn new(name: impl Into<String>, pos: Vec2) -> Self {
        Self {
            name: name.into(),
            pos,
            color: Self::WIP_COLOR,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
