//! Unit tests for settings loading, saving and sanitizing.

use lorise::constants::{
    DEFAULT_CELL_SIZE, DRAG_ZOOM_RATE, MAX_ZOOM, MIN_ZOOM, TACTIC_ICON_RADIUS, WHEEL_ZOOM_STEP,
};
use lorise::{Color, Settings, SettingsError};
use std::fs;

#[test]
fn test_defaults_match_constants() {
    let settings = Settings::default();
    assert_eq!(settings.camera.min_zoom, MIN_ZOOM);
    assert_eq!(settings.camera.max_zoom, MAX_ZOOM);
    assert_eq!(settings.camera.wheel_zoom_step, WHEEL_ZOOM_STEP);
    assert_eq!(settings.camera.drag_zoom_rate, DRAG_ZOOM_RATE);
    assert_eq!(settings.grid.cell_size, DEFAULT_CELL_SIZE);
    assert_eq!(settings.grid.color, Color::rgba(255, 255, 255, 20));
    assert_eq!(settings.icons.agent_radius, 10.0);
    assert_eq!(settings.icons.tactic_radius, TACTIC_ICON_RADIUS);
    assert_eq!(settings.icons.label_gap, 2.0);
    assert_eq!(settings.culling_margin, 50.0);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.camera.max_zoom = 1.75;
    settings.grid.cell_size = 64.5;
    settings.grid.color = Color::rgba(10, 20, 30, 40);

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("settings.json");
    Settings::default().save_to(&path).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Settings::load_from(&path) {
        Err(SettingsError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_load_or_default_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(&dir.path().join("absent.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_or_default_on_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    match Settings::load_from(&path) {
        Err(SettingsError::Json(_)) => {}
        other => panic!("expected json error, got {:?}", other),
    }
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_partial_file_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "grid": { "cell_size": 50.0 } }"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.grid.cell_size, 50.0);
    assert_eq!(settings.grid.color, Settings::default().grid.color);
    assert_eq!(settings.camera, Settings::default().camera);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{ "grid": { "cell_size": 50.0, "dashed": true }, "theme": "dark" }"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.grid.cell_size, 50.0);
}

#[test]
fn test_loaded_values_are_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "camera": { "min_zoom": -1.0, "wheel_zoom_step": 0.9 },
            "grid": { "cell_size": 0.0 },
            "icons": { "tactic_radius": -3.0 }
        }"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.camera.min_zoom, MIN_ZOOM);
    assert_eq!(settings.camera.wheel_zoom_step, WHEEL_ZOOM_STEP);
    assert_eq!(settings.grid.cell_size, DEFAULT_CELL_SIZE);
    assert_eq!(settings.icons.tactic_radius, TACTIC_ICON_RADIUS);
}

#[test]
fn test_sanitize_repairs_inverted_zoom_bounds() {
    let mut settings = Settings::default();
    settings.camera.min_zoom = 3.0;
    settings.camera.max_zoom = 1.0;
    let fixed = settings.sanitized();
    assert_eq!(fixed.camera.min_zoom, 3.0);
    assert_eq!(fixed.camera.max_zoom, 3.0);
    assert!(fixed.camera.min_zoom <= fixed.camera.max_zoom);
}

#[test]
fn test_sanitize_keeps_valid_values() {
    let mut settings = Settings::default();
    settings.camera.min_zoom = 0.25;
    settings.camera.max_zoom = 4.0;
    settings.grid.cell_size = 32.0;
    settings.icons.label_gap = 0.0;
    settings.culling_margin = 0.0;
    assert_eq!(settings.sanitized(), settings);
}

#[test]
fn test_default_path_points_into_config_dir() {
    match Settings::default_path() {
        Ok(path) => assert!(path.ends_with("lorise/settings.json")),
        // Headless CI images may have no config directory at all.
        Err(SettingsError::NoConfigDir) => {}
        Err(e) => panic!("unexpected error: {:?}", e),
    }
}

#[test]
fn test_error_messages_name_the_problem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "[1, 2").unwrap();
    let err = Settings::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("malformed settings file"));
}
