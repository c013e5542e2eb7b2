//! Mode transitions and event routing.
//!
//! A transition is always `exit(current)` followed by `enter(new)`. Exiting
//! detaches the old mode's bindings and undoes its visual side effects,
//! entering attaches the new mode's bindings and applies its own.

use super::state::Editor;
use crate::area::BorderKind;
use crate::host::CursorStyle;
use crate::input::EditorEvent;
use crate::modes::{Handler, Mode, ModeParseError};

impl Editor {
    /// Switch to `mode`. Switching to the current mode does nothing.
    pub fn set_mode(&mut self, mode: Mode) {
        let current = self.modes.current;
        if mode == current {
            return;
        }
        tracing::debug!(from = %current, to = %mode, "Mode change");
        self.exit_mode(current);
        self.enter_mode(mode);
    }

    /// Called when a modebar button with element id `id` is clicked.
    pub fn modebar_clicked(&mut self, id: &str) -> Result<(), ModeParseError> {
        let mode = self.modebar.click(id)?;
        self.set_mode(mode);
        Ok(())
    }

    /// Border presentation areas get outside of any highlighting
    pub(crate) fn default_border(&self) -> BorderKind {
        match self.modes.current {
            Mode::FreeDraw => BorderKind::None,
            _ => BorderKind::Default,
        }
    }

    pub(crate) fn enter_mode(&mut self, mode: Mode) {
        self.modes.current = mode;
        self.interaction.reset();

        match mode {
            Mode::Select | Mode::CreateText | Mode::CreateImage => {
                self.layout.set_all_borders(BorderKind::Default);
            }
            Mode::TextEdit => {
                self.layout.set_all_borders(BorderKind::Default);
                self.layout.set_all_read_only(false);
                self.sync_visibility();
            }
            Mode::FreeDraw => {
                self.layout.set_all_borders(BorderKind::None);
            }
        }

        let modes = &mut self.modes;
        modes.subscriptions.attach_all(modes.bindings.for_mode(mode));
    }

    pub(crate) fn exit_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Select => {
                self.host.set_cursor(CursorStyle::Default);
            }
            Mode::TextEdit => {
                self.layout.set_all_read_only(true);
            }
            Mode::CreateText | Mode::CreateImage => {
                if let Some(region) = self.interaction.input_state.erase_region() {
                    self.drawing.clear_rect(region);
                }
            }
            Mode::FreeDraw => {}
        }

        let modes = &mut self.modes;
        modes.subscriptions.detach_all(modes.bindings.for_mode(mode));
        self.interaction.reset();
    }

    /// Route a host event to the handlers attached for its kind.
    pub fn handle_event(&mut self, event: EditorEvent) {
        let handlers = self.modes.subscriptions.handlers_for(event.kind());
        for handler in handlers {
            self.run_handler(handler, &event);
        }
    }

    fn run_handler(&mut self, handler: Handler, event: &EditorEvent) {
        match (handler, event) {
            (Handler::AreaPointerMove, EditorEvent::PointerMove(p)) => self.handle_area_pointer_move(p),
            (Handler::AreaPointerDown, EditorEvent::PointerDown(p)) => self.handle_area_pointer_down(p),
            (Handler::AreaPointerUp, EditorEvent::PointerUp(p)) => self.handle_area_pointer_up(p),
            (Handler::NewAreaPointerDown, EditorEvent::PointerDown(p)) => {
                self.handle_new_area_pointer_down(p)
            }
            (Handler::NewAreaPointerMove, EditorEvent::PointerMove(p)) => {
                self.handle_new_area_pointer_move(p)
            }
            (Handler::NewTextPointerUp, EditorEvent::PointerUp(p)) => self.handle_new_text_pointer_up(p),
            (Handler::NewImagePointerUp, EditorEvent::PointerUp(p)) => {
                self.handle_new_image_pointer_up(p)
            }
            (Handler::ContainerScroll, EditorEvent::ContainerScroll) => self.handle_container_scroll(),
            (Handler::WindowScroll, EditorEvent::WindowScroll) => self.handle_window_scroll(),
            (Handler::WindowResize, EditorEvent::WindowResize) => self.handle_window_resize(),
            (handler, event) => {
                tracing::trace!(?handler, ?event, "Handler not applicable to event");
            }
        }
    }
}
