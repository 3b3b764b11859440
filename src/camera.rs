//! Camera state and coordinate conversion.
//!
//! This module centralizes the world/screen transform so the formula exists
//! in exactly one place. The transform scales about the viewport center:
//!
//! ```text
//! screen = center + (world - pan - center) * zoom
//! world  = pan + center + (screen - center) / zoom
//! ```
//!
//! `pan` is in world units, `zoom` is a scalar kept inside the configured
//! bounds by every mutation, so downstream code may divide by it freely.

use crate::constants::DEFAULT_ZOOM;
use crate::geometry::{Vec2, Viewport};

/// Pan offset plus zoom scalar. Cheap to copy; gesture previews work on a
/// copy and leave the committed camera untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Pan offset in world units
    pub pan: Vec2,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Convert a world position to screen coordinates.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2, viewport: Viewport) -> Vec2 {
        let center = viewport.center();
        center + (world - self.pan - center) * self.zoom
    }

    /// Convert a screen position to world coordinates.
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2, viewport: Viewport) -> Vec2 {
        let center = viewport.center();
        self.pan + center + (screen - center) / self.zoom
    }

    /// Convert a screen-space delta to a world-space delta (for drag
    /// operations).
    #[inline]
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        delta / self.zoom
    }

    /// Apply a multiplicative zoom factor, clamped so the resulting zoom
    /// stays within `[min_zoom, max_zoom]`. A factor above 1 zooms in.
    pub fn apply_zoom_factor(&mut self, factor: f32, min_zoom: f32, max_zoom: f32) {
        let clamped = factor.clamp(min_zoom / self.zoom, max_zoom / self.zoom);
        self.zoom *= clamped;
    }

    /// Force the zoom to a value, clamped into bounds. Used when zoom
    /// limits change under a live camera.
    pub fn set_zoom_clamped(&mut self, zoom: f32, min_zoom: f32, max_zoom: f32) {
        self.zoom = zoom.clamp(min_zoom, max_zoom);
    }

    /// Commit a finished pan drag: dragging the screen by `screen_delta`
    /// moves the pan offset by `-screen_delta / zoom`, so world content
    /// follows the cursor.
    pub fn pan_by_screen_delta(&mut self, screen_delta: Vec2) {
        self.pan -= screen_delta / self.zoom;
    }

    /// A copy of this camera with an uncommitted pan drag applied. The
    /// result matches what committing the same delta would produce.
    pub fn with_screen_pan(&self, screen_delta: Vec2) -> Self {
        let mut preview = *self;
        preview.pan_by_screen_delta(screen_delta);
        preview
    }
}
