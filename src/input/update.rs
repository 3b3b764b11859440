//! Per-frame gesture arbitration.
//!
//! Runs once per frame with the sampled input. Active gestures are advanced
//! or committed first; only if the state ends up idle can a new claim or a
//! wheel zoom happen. This ordering is what enforces pointer exclusivity:
//! while a pan is live, presses of the other buttons fall through without
//! effect, and wheel input is ignored.
//!
//! Commit rules on release:
//! - Pan: camera pan moves by `-delta / zoom`. A release with zero
//!   accumulated delta is a click, not a pan, and changes nothing.
//! - Zoom: nothing to commit; factors were applied live each frame.
//! - DragTactic: the tactic moves by `delta / zoom` (not sign-inverted;
//!   the icon lands where it was dropped). A tactic removed mid-drag
//!   commits nothing.

use crate::camera::Camera;
use crate::geometry::Vec2;
use crate::hit_testing;
use crate::input::snapshot::FrameInput;
use crate::input::state::Gesture;
use crate::profile_scope;
use crate::settings::Settings;
use crate::world::World;
use tracing::debug;

/// Advance the gesture state machine one frame, committing finished
/// gestures into the camera and world.
pub fn update_gestures(
    input: &FrameInput,
    gesture: &mut Gesture,
    camera: &mut Camera,
    world: &mut World,
    settings: &Settings,
) {
    profile_scope!("update_gestures");

    let cam = &settings.camera;

    match *gesture {
        Gesture::Pan { start, .. } => {
            if input.pan_button.down {
                gesture.update_pan(input.cursor);
            } else {
                let delta = input.cursor - start;
                if delta == Vec2::ZERO {
                    debug!("pan released without movement, camera unchanged");
                } else {
                    camera.pan_by_screen_delta(delta);
                    debug!(dx = delta.x, dy = delta.y, "pan committed");
                }
                gesture.reset();
            }
        }
        Gesture::Zoom { last_y } => {
            if input.zoom_button.down {
                let dy = input.cursor.y - last_y;
                if dy != 0.0 {
                    // Dragging down zooms out, dragging up zooms in.
                    let factor = 1.0 - dy * cam.drag_zoom_rate;
                    camera.apply_zoom_factor(factor, cam.min_zoom, cam.max_zoom);
                }
                gesture.update_zoom_anchor(input.cursor.y);
            } else {
                debug!(zoom = camera.zoom(), "zoom gesture finished");
                gesture.reset();
            }
        }
        Gesture::DragTactic { id, start, .. } => {
            if input.drag_button.down {
                gesture.update_drag(input.cursor);
            } else {
                let delta = input.cursor - start;
                if let Some(tactic) = world.tactic(id) {
                    let new_pos = tactic.pos + camera.screen_delta_to_world(delta);
                    world.move_tactic(id, new_pos);
                    debug!(?id, x = new_pos.x, y = new_pos.y, "tactic drag committed");
                } else {
                    debug!(?id, "dragged tactic vanished, drop discarded");
                }
                gesture.reset();
            }
        }
        Gesture::Idle => {}
    }

    // Claims: a release above may have freed the pointer this same frame.
    // A drag press that misses every icon claims nothing and does not
    // consume the pointer, so a simultaneous pan or zoom press may still
    // claim below.
    if gesture.is_idle() && input.drag_button.pressed {
        if let Some(id) = hit_testing::nearest_tactic(
            world,
            camera,
            input.viewport,
            input.cursor,
            settings.icons.tactic_radius,
        ) {
            gesture.claim_drag_tactic(id, input.cursor);
            debug!(?id, "tactic drag claimed");
        }
    }
    if gesture.is_idle() {
        if input.pan_button.pressed {
            gesture.claim_pan(input.cursor);
            debug!("pan claimed");
        } else if input.zoom_button.pressed {
            gesture.claim_zoom(input.cursor.y);
            debug!("zoom claimed");
        }
    }

    // Wheel zoom is an idle-only instant action, never a gesture.
    if gesture.is_idle() && input.wheel != 0.0 {
        let factor = cam.wheel_zoom_step.powf(input.wheel);
        camera.apply_zoom_factor(factor, cam.min_zoom, cam.max_zoom);
    }
}
