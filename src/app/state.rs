//! Editor state - the Editor struct definition and sub-structs.

use super::text_areas::PendingTextArea;
use crate::canvas::DrawingSurface;
use crate::host::Host;
use crate::input::InputState;
use crate::modebar::ModeSelector;
use crate::modes::{Mode, ModeBindings, Subscriptions};
use crate::notifications::NoticeManager;
use crate::settings::EditorSettings;
use crate::settings_watcher::SettingsWatcher;
use crate::surface::{HitResult, LayoutSurface};
use crate::widget::WidgetFactory;

/// Current mode, the per-mode binding table and what is attached right now
pub struct ModeState {
    pub current: Mode,
    /// Built once at construction, never modified
    pub bindings: ModeBindings,
    pub subscriptions: Subscriptions,
}

/// Transient pointer interaction, reset on every mode change
#[derive(Debug, Default)]
pub struct InteractionState {
    /// Classification of the last pointer position (select mode)
    pub location: Option<HitResult>,
    pub input_state: InputState,
}

impl InteractionState {
    pub fn reset(&mut self) {
        self.location = None;
        self.input_state.reset();
    }
}

/// Scroll/resize synchronization bookkeeping
#[derive(Debug, Default)]
pub struct SyncState {
    /// Deepest workspace scroll seen; the drawing surface has grown to cover it
    pub recorded_depth: f32,
}

/// One editor instance mounted in one host container.
pub struct Editor {
    pub(crate) container_id: String,
    pub(crate) host: Box<dyn Host>,
    pub(crate) drawing: Box<dyn DrawingSurface>,
    pub(crate) widgets: Box<dyn WidgetFactory>,
    pub(crate) settings: EditorSettings,
    pub(crate) settings_watcher: Option<SettingsWatcher>,
    pub(crate) layout: LayoutSurface,
    pub(crate) modes: ModeState,
    pub(crate) interaction: InteractionState,
    pub(crate) sync: SyncState,
    pub(crate) modebar: ModeSelector,
    /// Text areas whose widget creation has not settled yet
    pub(crate) pending: Vec<PendingTextArea>,
    pub(crate) notices: NoticeManager,
}

impl Editor {
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn mode(&self) -> Mode {
        self.modes.current
    }

    pub fn layout(&self) -> &LayoutSurface {
        &self.layout
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.modes.subscriptions
    }

    pub fn modebar(&self) -> &ModeSelector {
        &self.modebar
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn notices(&self) -> &NoticeManager {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeManager {
        &mut self.notices
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn drawing(&self) -> &dyn DrawingSurface {
        self.drawing.as_ref()
    }
}
