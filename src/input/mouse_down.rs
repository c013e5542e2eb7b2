//! Pointer down handling - start of move/resize and rubber band gestures.

use super::PointerEvent;
use super::coords::{CoordinateContext, CoordinateConverter};
use crate::app::Editor;
use crate::geometry::Point;

impl Editor {
    /// Pointer position in document coordinates
    pub(crate) fn document_pos(&self, event: &PointerEvent) -> Point {
        let ctx = CoordinateContext::from_host(self.host.as_ref());
        CoordinateConverter::client_to_document(event.client, &ctx)
    }

    /// Select mode: start moving or resizing the highlighted area.
    pub(crate) fn handle_area_pointer_down(&mut self, event: &PointerEvent) {
        if !event.is_primary() {
            return;
        }
        let state = &self.interaction.input_state;
        let Some(active_zone) = state.active_zone() else {
            return;
        };
        let zone = self
            .interaction
            .location
            .map(|location| location.zone)
            .unwrap_or(active_zone);
        let pos = self.document_pos(event);
        tracing::debug!(%zone, x = pos.x, y = pos.y, "Area gesture started");
        self.interaction.input_state.start_manipulating(zone, pos);
    }

    /// Create modes: anchor a new rubber band.
    pub(crate) fn handle_new_area_pointer_down(&mut self, event: &PointerEvent) {
        if !event.is_primary() {
            return;
        }
        let pos = self.document_pos(event);
        tracing::debug!(x = pos.x, y = pos.y, "Rubber band anchored");
        self.interaction.input_state.start_rubber_band(pos);
    }
}
