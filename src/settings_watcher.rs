//! Settings hot-reload via filesystem watching.
//!
//! Watches the settings file's directory and re-parses the file whenever it
//! changes, so edits apply to a running view without a restart. Parsed
//! settings travel over a channel that the frame loop drains once per
//! frame; the notify callback thread never touches view state directly.
//!
//! Editors typically replace files by rename, which is why the watch is on
//! the parent directory with events filtered to the settings path.

use crate::settings::Settings;
use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};
use tracing::{debug, warn};

/// Watches a settings file and yields freshly parsed [`Settings`] on change.
pub struct SettingsWatcher {
    // Dropping the watcher stops the notify thread; keep it alive with us.
    _watcher: RecommendedWatcher,
    rx: Receiver<Settings>,
}

impl SettingsWatcher {
    /// Start watching `path`. The file does not need to exist yet; it will
    /// be picked up when first created.
    pub fn new(path: PathBuf) -> Result<Self> {
        let dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .with_context(|| format!("settings path has no parent: {}", path.display()))?;

        let (tx, rx) = channel();
        let watched = path.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "settings watch error");
                    return;
                }
            };
            if !(event.kind.is_modify() || event.kind.is_create()) {
                return;
            }
            if !event.paths.iter().any(|p| p == &watched) {
                return;
            }
            match Settings::load_from(&watched) {
                Ok(settings) => {
                    debug!(path = %watched.display(), "settings file changed");
                    // Receiver gone means the view shut down; nothing to do.
                    let _ = tx.send(settings);
                }
                Err(e) => {
                    warn!(path = %watched.display(), error = %e, "ignoring unreadable settings change");
                }
            }
        })
        .context("failed to create settings watcher")?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", dir.display()))?;

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Latest reloaded settings since the last poll, if any. Intermediate
    /// versions from rapid successive edits are discarded.
    pub fn poll(&self) -> Option<Settings> {
        let mut latest = None;
        while let Ok(settings) = self.rx.try_recv() {
            latest = Some(settings);
        }
        latest
    }
}
