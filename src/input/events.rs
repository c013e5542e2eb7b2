//! Events forwarded by the host.

use crate::geometry::Point;
use crate::modes::EventKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// From a DOM `MouseEvent.button` code
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Viewport position of the pointer
    pub client: Point,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            client: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    ContainerScroll,
    WindowScroll,
    WindowResize,
}

impl EditorEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            EditorEvent::PointerDown(_) => EventKind::PointerDown,
            EditorEvent::PointerMove(_) => EventKind::PointerMove,
            EditorEvent::PointerUp(_) => EventKind::PointerUp,
            EditorEvent::ContainerScroll => EventKind::ContainerScroll,
            EditorEvent::WindowScroll => EventKind::WindowScroll,
            EditorEvent::WindowResize => EventKind::WindowResize,
        }
    }
}
