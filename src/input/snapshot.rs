//! Per-frame input snapshot.
//!
//! The embedder samples its windowing layer once per frame and hands the
//! result to [`crate::LoRise::frame`]. The view never talks to the OS; this
//! plain-data struct is the entire input surface.

use crate::geometry::{Vec2, Viewport};

/// Edge and level state for one pointer button over one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Went down this frame
    pub pressed: bool,
    /// Held down at sampling time
    pub down: bool,
    /// Went up this frame
    pub released: bool,
}

impl ButtonState {
    /// Button went down this frame.
    pub const fn press() -> Self {
        Self {
            pressed: true,
            down: true,
            released: false,
        }
    }

    /// Button held from an earlier frame.
    pub const fn held() -> Self {
        Self {
            pressed: false,
            down: true,
            released: false,
        }
    }

    /// Button went up this frame.
    pub const fn release() -> Self {
        Self {
            pressed: false,
            down: false,
            released: true,
        }
    }

    /// Button untouched.
    pub const fn up() -> Self {
        Self {
            pressed: false,
            down: false,
            released: false,
        }
    }
}

/// Everything the view needs to know about input for one frame.
///
/// Buttons are named by role rather than by physical button; the usual
/// embedder mapping is left = drag, middle = pan, right = zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Cursor position in screen coordinates
    pub cursor: Vec2,
    /// Drag button: claims a tactic drag when pressed over an icon
    pub drag_button: ButtonState,
    /// Pan button: claims a camera pan
    pub pan_button: ButtonState,
    /// Zoom button: claims a drag-zoom
    pub zoom_button: ButtonState,
    /// Scroll wheel movement in notches; positive zooms in
    pub wheel: f32,
    /// Current render target size
    pub viewport: Viewport,
}

impl FrameInput {
    /// An input frame with no button or wheel activity.
    pub fn at(cursor: Vec2, viewport: Viewport) -> Self {
        Self {
            cursor,
            viewport,
            ..Self::default()
        }
    }
}
