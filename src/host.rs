//! The host the editor is mounted in.
//!
//! A host owns the real workspace element (a scrollable div in a browser).
//! The editor pulls geometry from it whenever it needs it instead of caching,
//! so scrolling and resizing are always observed as they are.

use crate::geometry::{Point, Size, Zone};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Grab,
    EwResize,
}

impl CursorStyle {
    /// Hover cursor for a zone of the active area
    pub fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Inside => CursorStyle::Grab,
            Zone::Left | Zone::Right => CursorStyle::EwResize,
            _ => CursorStyle::Default,
        }
    }

    pub fn css_name(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Grab => "grab",
            CursorStyle::EwResize => "ew-resize",
        }
    }
}

pub trait Host {
    /// On-screen (viewport) position of the workspace's upper left corner.
    fn workspace_origin(&self) -> Point;

    /// How far the workspace content is scrolled (`scrollLeft`, `scrollTop`).
    fn workspace_scroll(&self) -> Point;

    /// Visible size of the workspace.
    fn workspace_client_size(&self) -> Size;

    fn set_cursor(&mut self, cursor: CursorStyle);
}
