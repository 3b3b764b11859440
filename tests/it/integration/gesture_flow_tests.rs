//! End-to-end gesture workflows through the view.
//!
//! Every test here drives `LoRise::frame` with scripted input, the same
//! entry point an embedder uses, and checks the visible outcome: camera
//! movement, tactic placement, scene contents.

use lorise::{LoRise, Settings, Tactic, Vec2};

use crate::helpers::{
    assert_near, assert_vec2_near, drag_hold, drag_press, drag_release, drive, idle_at, lines,
    pan_hold, pan_press, pan_release, positions, wheel_at, zoom_hold, zoom_press, zoom_release,
};

#[test]
fn test_pan_cycle_moves_camera() {
    let mut view = LoRise::default();

    view.frame(&pan_press(400.0, 300.0));
    view.frame(&pan_hold(450.0, 320.0));
    // Nothing commits while the button is down.
    assert_eq!(view.camera().pan, Vec2::ZERO);
    assert!(view.gesture().is_pan());

    view.frame(&pan_release(500.0, 340.0));
    assert!(view.gesture().is_idle());
    assert_eq!(view.camera().pan, Vec2::new(-100.0, -40.0));
}

#[test]
fn test_click_without_movement_keeps_camera() {
    let mut view = LoRise::default();
    drive(
        &mut view,
        &[pan_press(250.0, 250.0), pan_release(250.0, 250.0)],
    );
    assert_eq!(view.camera().pan, Vec2::ZERO);
    assert!(view.gesture().is_idle());
}

#[test]
fn test_wheel_zoom_caps_at_bounds() {
    let mut view = LoRise::default();

    // Ten notches in would be 1.1^10 = 2.59x; the camera stops exactly
    // at max zoom.
    view.frame(&wheel_at(400.0, 300.0, 10.0));
    assert_eq!(view.camera().zoom(), 2.0);

    // And twenty notches out lands exactly on min zoom.
    view.frame(&wheel_at(400.0, 300.0, -20.0));
    assert_eq!(view.camera().zoom(), 0.5);
}

#[test]
fn test_zoom_drag_cycle() {
    let mut view = LoRise::default();
    drive(
        &mut view,
        &[
            zoom_press(400.0, 300.0),
            zoom_hold(400.0, 200.0),
            zoom_release(400.0, 200.0),
        ],
    );
    assert!(view.gesture().is_idle());
    assert_near(view.camera().zoom(), 1.5, 1e-3);
}

#[test]
fn test_drag_moves_tactic_end_to_end() {
    let mut view = LoRise::default();
    let id = view
        .world_mut()
        .add_tactic(Tactic::new("overwatch", Vec2::new(450.0, 330.0)));

    view.frame(&drag_press(450.0, 330.0));
    view.frame(&drag_hold(480.0, 350.0));
    // Held, not committed.
    assert_eq!(
        view.world().tactic(id).map(|t| t.pos),
        Some(Vec2::new(450.0, 330.0))
    );

    view.frame(&drag_release(480.0, 350.0));
    assert_eq!(
        view.world().tactic(id).map(|t| t.pos),
        Some(Vec2::new(480.0, 350.0))
    );
    assert!(view.gesture().is_idle());
}

#[test]
fn test_drag_press_on_empty_space_is_inert() {
    let mut view = LoRise::default();
    view.world_mut()
        .add_tactic(Tactic::new("overwatch", Vec2::new(100.0, 100.0)));

    let (x, y) = positions::EMPTY_SPACE;
    drive(&mut view, &[drag_press(x, y), drag_release(x, y)]);

    assert!(view.gesture().is_idle());
    assert_eq!(view.camera().pan, Vec2::ZERO);
}

#[test]
fn test_gestures_chain_cleanly() {
    let mut view = LoRise::default();
    let id = view
        .world_mut()
        .add_tactic(Tactic::new("overwatch", Vec2::new(400.0, 300.0)));

    // Pan right by 50 screen pixels.
    drive(
        &mut view,
        &[pan_press(400.0, 300.0), pan_release(450.0, 300.0)],
    );
    assert_eq!(view.camera().pan, Vec2::new(-50.0, 0.0));

    // Zoom to 1.5x with a drag.
    drive(
        &mut view,
        &[
            zoom_press(400.0, 300.0),
            zoom_hold(400.0, 200.0),
            zoom_release(400.0, 200.0),
        ],
    );
    assert_near(view.camera().zoom(), 1.5, 1e-3);

    // The tactic at world (400, 300) now appears at screen (475, 300);
    // grab it there and nudge it.
    drive(
        &mut view,
        &[drag_press(475.0, 300.0), drag_release(485.0, 310.0)],
    );
    let moved = view.world().tactic(id).map(|t| t.pos);
    assert!(moved.is_some());
    assert_vec2_near(
        moved.unwrap(),
        Vec2::new(400.0, 300.0) + Vec2::new(10.0, 10.0) / 1.5,
        1e-3,
    );
    assert!(view.gesture().is_idle());
}

#[test]
fn test_apply_settings_reclamps_zoom() {
    let mut view = LoRise::default();
    view.frame(&wheel_at(400.0, 300.0, 10.0));
    assert_eq!(view.camera().zoom(), 2.0);

    let mut tighter = Settings::default();
    tighter.camera.max_zoom = 1.5;
    view.apply_settings(tighter);
    assert_eq!(view.camera().zoom(), 1.5);
    assert_eq!(view.settings().camera.max_zoom, 1.5);
}

#[test]
fn test_apply_settings_sanitizes_input() {
    let mut view = LoRise::default();
    let mut broken = Settings::default();
    broken.grid.cell_size = 0.0;
    view.apply_settings(broken);
    assert_eq!(view.settings().grid.cell_size, 100.0);
}

#[test]
fn test_monitor_counts_frames() {
    let mut view = LoRise::default();
    let (cx, cy) = positions::CENTER;
    for _ in 0..3 {
        view.frame(&idle_at(cx, cy));
    }
    assert_eq!(view.monitor().total_frames(), 3);
}

#[test]
fn test_debug_marks_drain_after_one_frame() {
    let mut view = LoRise::default();
    view.debug_mark(Vec2::new(400.0, 300.0));

    let marked = view.frame(&idle_at(10.0, 10.0));
    let unmarked = view.frame(&idle_at(10.0, 10.0));

    // A cross is two extra lines on top of the grid.
    assert_eq!(lines(&marked).len(), lines(&unmarked).len() + 2);
}

#[test]
fn test_watched_settings_view_survives_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = LoRise::with_watched_settings(dir.path().join("settings.json"));
    let scene = view.frame(&idle_at(400.0, 300.0));
    assert!(!scene.is_empty());
    assert_eq!(view.settings(), &Settings::default());
}
