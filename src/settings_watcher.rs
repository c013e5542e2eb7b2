//! Hot reload of the settings file.
//!
//! The parent directory is watched rather than the file itself so that
//! editors which replace the file on save are still noticed.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

pub use crate::settings::default_settings_path;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        let watched = path.parent().unwrap_or(&path);
        watcher.watch(watched, RecursiveMode::NonRecursive)?;
        Ok(Self {
            _watcher: watcher,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending notifications without blocking.
    ///
    /// Bursts of events for one save collapse into the last relevant one.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(mapped) = self.map_event(&event) {
                        latest = Some(mapped);
                    }
                }
                Ok(Err(e)) => latest = Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    latest = Some(SettingsEvent::Error("settings watcher disconnected".into()));
                    break;
                }
            }
        }
        latest
    }

    fn map_event(&self, event: &Event) -> Option<SettingsEvent> {
        if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(SettingsEvent::Created),
            EventKind::Modify(_) => Some(SettingsEvent::Modified),
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            _ => None,
        }
    }
}
