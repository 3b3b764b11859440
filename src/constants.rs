//! Tuning constants for the view.
//!
//! Every number that shapes interaction or presentation lives here;
//! the configurable subset feeds the [`crate::settings`] defaults.

use crate::color::Color;

// ============================================================================
// Camera
// ============================================================================

/// Smallest zoom the camera may reach
pub const MIN_ZOOM: f32 = 0.5;

/// Largest zoom the camera may reach
pub const MAX_ZOOM: f32 = 2.0;

/// Zoom of a freshly created camera
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Multiplicative zoom factor per scroll wheel notch
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

/// Zoom factor change per pixel of vertical drag (right-button zoom)
pub const DRAG_ZOOM_RATE: f32 = 0.005;

// ============================================================================
// Grid
// ============================================================================

/// Grid cell size in world units
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

/// Default grid line color (faint white)
pub const DEFAULT_GRID_COLOR: Color = Color::rgba(255, 255, 255, 20);

// ============================================================================
// Icons & Labels
// ============================================================================

/// Agent icon radius in world units at zoom 1.0
pub const AGENT_ICON_RADIUS: f32 = 10.0;

/// Tactic icon radius in world units at zoom 1.0
pub const TACTIC_ICON_RADIUS: f32 = 20.0;

/// Agent label offset below the icon center, as a multiple of the icon radius
pub const LABEL_GAP_FACTOR: f32 = 2.0;

/// Sides of the triangle drawn for airborne agents
pub const AIR_AGENT_SIDES: u32 = 3;

/// Sides of the square drawn for ground agents
pub const GROUND_AGENT_SIDES: u32 = 4;

// ============================================================================
// Culling
// ============================================================================

/// The culling rect extends this many pixels past the viewport on each side
/// so icons are already in the draw list when they slide into view
pub const CULLING_MARGIN: f32 = 50.0;

// ============================================================================
// Hit Testing
// ============================================================================

/// World-unit slack added to broad-phase queries so borderline icons are
/// never pruned before the exact distance check
pub const BROAD_PHASE_SLACK: f32 = 1.0;

// ============================================================================
// Debug Overlay
// ============================================================================

/// Half-extent in pixels of the debug cross marker
pub const DEBUG_MARK_SIZE: f32 = 5.0;
