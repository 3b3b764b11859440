//! View settings: camera bounds, grid, icon sizing and culling.
//!
//! Settings live in a JSON file under the platform config directory and
//! are safe to hand-edit; unknown fields are ignored and missing fields
//! fall back to defaults, so older files keep loading across releases.
//! Saves are atomic (temp file + rename) so a crash mid-write can never
//! leave a truncated settings file behind.

use crate::color::Color;
use crate::constants::{
    AGENT_ICON_RADIUS, CULLING_MARGIN, DEFAULT_CELL_SIZE, DEFAULT_GRID_COLOR, DRAG_ZOOM_RATE,
    LABEL_GAP_FACTOR, MAX_ZOOM, MIN_ZOOM, TACTIC_ICON_RADIUS, WHEEL_ZOOM_STEP,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors from loading or saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Camera tuning and zoom bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Lower zoom bound
    pub min_zoom: f32,
    /// Upper zoom bound
    pub max_zoom: f32,
    /// Multiplicative factor per wheel notch
    pub wheel_zoom_step: f32,
    /// Zoom factor change per pixel of vertical drag
    pub drag_zoom_rate: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            drag_zoom_rate: DRAG_ZOOM_RATE,
        }
    }
}

/// Background grid appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Cell size in world units
    pub cell_size: f32,
    /// Line color
    pub color: Color,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            color: DEFAULT_GRID_COLOR,
        }
    }
}

/// Icon sizing in world units at zoom 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    /// Agent icon radius
    pub agent_radius: f32,
    /// Tactic icon radius, also the hit-test pick radius
    pub tactic_radius: f32,
    /// Agent label offset below the icon, as a multiple of the icon radius
    pub label_gap: f32,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            agent_radius: AGENT_ICON_RADIUS,
            tactic_radius: TACTIC_ICON_RADIUS,
            label_gap: LABEL_GAP_FACTOR,
        }
    }
}

/// All user-tunable settings for the view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub camera: CameraSettings,
    pub grid: GridSettings,
    pub icons: IconSettings,
    /// Extra margin in pixels around the viewport kept un-culled
    pub culling_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            grid: GridSettings::default(),
            icons: IconSettings::default(),
            culling_margin: CULLING_MARGIN,
        }
    }
}

impl Settings {
    /// Default settings file location under the platform config directory.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(dir.join("lorise").join("settings.json"))
    }

    /// Load settings from a file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    /// Load settings, falling back to defaults on any error. A missing
    /// file is normal on first run and logs nothing; anything else warns.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load settings, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Atomically write settings to a file, creating parent directories as
    /// needed. The temp file lives next to the target so the final rename
    /// stays on one filesystem.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(path).map_err(|e| SettingsError::Io(e.error))?;
        Ok(())
    }

    /// Clamp loaded values into ranges the rest of the code can divide by
    /// and iterate over without further checks.
    pub fn sanitized(mut self) -> Self {
        self.camera.min_zoom = positive_or(self.camera.min_zoom, MIN_ZOOM);
        if self.camera.max_zoom.is_nan() || self.camera.max_zoom < self.camera.min_zoom {
            self.camera.max_zoom = self.camera.min_zoom.max(MAX_ZOOM);
        }
        if self.camera.wheel_zoom_step.is_nan() || self.camera.wheel_zoom_step <= 1.0 {
            self.camera.wheel_zoom_step = WHEEL_ZOOM_STEP;
        }
        self.camera.drag_zoom_rate = positive_or(self.camera.drag_zoom_rate, DRAG_ZOOM_RATE);
        self.grid.cell_size = positive_or(self.grid.cell_size, DEFAULT_CELL_SIZE);
        self.icons.agent_radius = positive_or(self.icons.agent_radius, AGENT_ICON_RADIUS);
        self.icons.tactic_radius = positive_or(self.icons.tactic_radius, TACTIC_ICON_RADIUS);
        if self.icons.label_gap.is_nan() || self.icons.label_gap < 0.0 {
            self.icons.label_gap = LABEL_GAP_FACTOR;
        }
        if self.culling_margin.is_nan() || self.culling_margin < 0.0 {
            self.culling_margin = CULLING_MARGIN;
        }
        self
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
