//! The top-level view: composed state plus the per-frame entry point.
//!
//! [`LoRise`] owns the camera, gesture state, world store, settings and
//! frame monitor. The embedder drives it with one [`LoRise::frame`] call
//! per render tick and draws the returned scene; the simulation mutates
//! entities through [`LoRise::world_mut`] between frames.

use crate::camera::Camera;
use crate::geometry::Vec2;
use crate::input::{FrameInput, Gesture, update_gestures};
use crate::perf::FrameMonitor;
use crate::render::{Scene, compose_scene};
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::world::World;
use std::path::PathBuf;
use tracing::info;

/// Top-down tactical view over a [`World`].
pub struct LoRise {
    camera: Camera,
    gesture: Gesture,
    world: World,
    settings: Settings,
    monitor: FrameMonitor,
    /// World-space positions to mark with a cross on the next frame only
    debug_marks: Vec<Vec2>,
    settings_watcher: Option<SettingsWatcher>,
}

impl Default for LoRise {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl LoRise {
    pub fn new(settings: Settings) -> Self {
        Self {
            camera: Camera::new(),
            gesture: Gesture::Idle,
            world: World::new(),
            settings: settings.sanitized(),
            monitor: FrameMonitor::new(),
            debug_marks: Vec::new(),
            settings_watcher: None,
        }
    }

    /// Load settings from `path` (or defaults when absent) and watch the
    /// file for changes. Watch failures are reported but leave the view
    /// fully usable.
    pub fn with_watched_settings(path: PathBuf) -> Self {
        let mut view = Self::new(Settings::load_or_default(&path));
        match SettingsWatcher::new(path) {
            Ok(watcher) => view.settings_watcher = Some(watcher),
            Err(e) => info!(error = %e, "settings hot-reload unavailable"),
        }
        view
    }

    /// Advance the view one frame: apply any reloaded settings, arbitrate
    /// gestures, and compose the draw list. Queued debug marks render on
    /// this frame and are then dropped.
    pub fn frame(&mut self, input: &FrameInput) -> Scene {
        self.monitor.begin_frame();

        if let Some(reloaded) = self.settings_watcher.as_ref().and_then(|w| w.poll()) {
            self.apply_settings(reloaded);
        }

        update_gestures(
            input,
            &mut self.gesture,
            &mut self.camera,
            &mut self.world,
            &self.settings,
        );

        let scene = compose_scene(
            &self.world,
            &self.camera,
            &self.gesture,
            input.viewport,
            &self.settings,
            &self.debug_marks,
        );
        self.debug_marks.clear();

        self.monitor.end_frame();
        scene
    }

    /// Replace the settings, re-clamping the current zoom into the new
    /// bounds.
    pub fn apply_settings(&mut self, settings: Settings) {
        let settings = settings.sanitized();
        self.camera.set_zoom_clamped(
            self.camera.zoom(),
            settings.camera.min_zoom,
            settings.camera.max_zoom,
        );
        self.settings = settings;
        info!("settings applied");
    }

    /// Queue a world-space point to be marked with a cross on the next
    /// frame.
    pub fn debug_mark(&mut self, world_pos: Vec2) {
        self.debug_marks.push(world_pos);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn monitor(&self) -> &FrameMonitor {
        &self.monitor
    }
}
