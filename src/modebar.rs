//! The mode bar: one toggle button per mode, exactly one of them active.
//!
//! The bar only tracks its own buttons. The editor performs the actual mode
//! transition, see [`crate::app::Editor::modebar_clicked`].

use crate::modes::{Mode, ModeParseError};
use crate::settings::ModebarColors;

#[derive(Debug, Clone, PartialEq)]
pub struct ModeButton {
    pub mode: Mode,
    pub icon: &'static str,
    pub title: &'static str,
    pub active: bool,
}

impl ModeButton {
    const fn new(mode: Mode, icon: &'static str, title: &'static str) -> Self {
        Self {
            mode,
            icon,
            title,
            active: false,
        }
    }

    /// Host element id of the button
    pub fn element_id(&self) -> &'static str {
        self.mode.id()
    }

    pub fn background<'a>(&self, colors: &'a ModebarColors) -> &'a str {
        if self.active { &colors.active } else { &colors.inactive }
    }
}

#[derive(Debug, Clone)]
pub struct ModeSelector {
    buttons: Vec<ModeButton>,
}

impl ModeSelector {
    pub fn new() -> Self {
        Self {
            buttons: vec![
                ModeButton::new(Mode::Select, "/isImg/isOriginalImg.png", "Handle text areas"),
                ModeButton::new(Mode::CreateText, "/isImg/isAreaTxt.png", "Insert new text area"),
                ModeButton::new(Mode::CreateImage, "/isImg/isAreaChoice.png", "Insert new image area"),
                ModeButton::new(Mode::TextEdit, "/isImg/isSchar.png", "Text mode"),
                ModeButton::new(Mode::FreeDraw, "/isImg/isPencilGrey.png", "Pencil mode"),
            ],
        }
    }

    pub fn buttons(&self) -> &[ModeButton] {
        &self.buttons
    }

    /// Mark the button of `mode` active and every other button inactive.
    pub fn select(&mut self, mode: Mode) {
        for button in &mut self.buttons {
            button.active = button.mode == mode;
        }
    }

    /// Handle a click on the button with element id `id`.
    pub fn click(&mut self, id: &str) -> Result<Mode, ModeParseError> {
        let mode: Mode = id.parse()?;
        self.select(mode);
        Ok(mode)
    }

    pub fn active(&self) -> Option<Mode> {
        self.buttons.iter().find(|b| b.active).map(|b| b.mode)
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new()
    }
}
