//! Editor lifecycle - construction and settings reload.

use super::state::{Editor, InteractionState, ModeState, SyncState};
use crate::canvas::DrawingSurface;
use crate::geometry::Size;
use crate::host::Host;
use crate::modebar::ModeSelector;
use crate::modes::{Binding, EventKind, Handler, Mode, ModeBindings, Subscriptions};
use crate::notifications::{Notice, NoticeManager};
use crate::settings::EditorSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::surface::LayoutSurface;
use crate::widget::WidgetFactory;
use std::path::PathBuf;

impl Editor {
    /// Mount an editor in the container `container_id`.
    ///
    /// The drawing surface is sized to the workspace, the window resize
    /// handler is attached for the editor's lifetime and the editor starts
    /// in select mode with the matching modebar button active.
    pub fn new(
        container_id: impl Into<String>,
        host: Box<dyn Host>,
        drawing: Box<dyn DrawingSurface>,
        widgets: Box<dyn WidgetFactory>,
        settings: EditorSettings,
    ) -> Self {
        let mut editor = Self {
            container_id: container_id.into(),
            host,
            drawing,
            widgets,
            settings,
            settings_watcher: None,
            layout: LayoutSurface::new(),
            modes: ModeState {
                current: Mode::Select,
                bindings: ModeBindings::new(),
                subscriptions: Subscriptions::new(),
            },
            interaction: InteractionState::default(),
            sync: SyncState::default(),
            modebar: ModeSelector::new(),
            pending: Vec::new(),
            notices: NoticeManager::new(),
        };

        let client = editor.host.workspace_client_size();
        let height = (client.height - editor.settings.surface_bottom_inset).max(0.0);
        editor.drawing.resize(Size::new(client.width, height));
        editor
            .modes
            .subscriptions
            .attach(Binding::new(EventKind::WindowResize, Handler::WindowResize));

        editor.enter_mode(Mode::Select);
        editor.modebar.select(Mode::Select);
        tracing::debug!(container = %editor.container_id, "Editor mounted");
        editor
    }

    /// Watch `path` and reload settings from it on change.
    pub fn watch_settings(&mut self, path: PathBuf) -> notify::Result<()> {
        self.settings_watcher = Some(SettingsWatcher::new(path)?);
        Ok(())
    }

    pub fn apply_settings(&mut self, settings: EditorSettings) {
        self.settings = settings;
    }

    /// Check for settings file changes and reload if needed.
    pub fn check_settings_reload(&mut self) {
        let Some(watcher) = self.settings_watcher.as_mut() else {
            return;
        };
        let Some(event) = watcher.poll() else {
            return;
        };
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                match EditorSettings::load_from(watcher.path()) {
                    Ok(settings) => {
                        tracing::info!("Settings file changed, reloaded");
                        self.settings = settings;
                        self.notices.push(Notice::info("Settings reloaded"));
                    }
                    Err(e) => {
                        tracing::warn!("Keeping previous settings: {:#}", e);
                        self.notices.push(Notice::warning("Settings file could not be read"));
                    }
                }
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted");
                self.notices.push(Notice::warning("Settings file deleted"));
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
            }
        }
    }
}
