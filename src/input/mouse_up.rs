//! Pointer up handling - end of gestures, creation of drawn areas.

use super::{InputState, PointerEvent};
use crate::app::Editor;
use crate::geometry::{Point, Zone};

/// Extent of a finished rubber band
struct DrawnBand {
    anchor: Point,
    width: f32,
    height: f32,
}

impl Editor {
    /// Select mode: end the move/resize. An edge resize that left the area
    /// narrower than the minimum size is widened back to it, keeping the
    /// edge opposite the dragged one in place.
    pub(crate) fn handle_area_pointer_up(&mut self, event: &PointerEvent) {
        if !event.is_primary() {
            return;
        }
        let InputState::Manipulating { index, zone, .. } = self.interaction.input_state else {
            return;
        };

        let floor = self.settings.min_area_size;
        if let Some(area) = self.layout.get_mut(index) {
            if area.width < floor {
                match zone {
                    Zone::Left => area.resize_left(area.width - floor),
                    Zone::Right => area.resize_right(floor - area.width),
                    _ => {}
                }
                tracing::debug!(id = %area.id, width = area.width, "Resized area widened to minimum");
            }
        }

        tracing::debug!("Area gesture ended");
        self.interaction.input_state.stop_manipulating();
    }

    pub(crate) fn handle_new_text_pointer_up(&mut self, event: &PointerEvent) {
        let Some(band) = self.finish_rubber_band(event) else {
            return;
        };
        if band.width <= self.settings.click_threshold {
            tracing::debug!(width = band.width, "Text area drag too small, ignored");
            return;
        }
        let width = band.width.max(self.settings.min_area_size);
        self.queue_text_area(band.anchor.y, band.anchor.x, width);
    }

    pub(crate) fn handle_new_image_pointer_up(&mut self, event: &PointerEvent) {
        let Some(band) = self.finish_rubber_band(event) else {
            return;
        };
        if band.width <= self.settings.click_threshold {
            tracing::debug!(width = band.width, "Image area drag too small, ignored");
            return;
        }
        let width = band.width.max(self.settings.min_area_size);
        let height = band.height.max(self.settings.min_area_size);
        self.add_image_area(band.anchor.y, band.anchor.x, width, height);
    }

    /// Erase the rubber band and reset the anchor on any button release.
    /// Only a primary release yields a band to create an area from.
    fn finish_rubber_band(&mut self, event: &PointerEvent) -> Option<DrawnBand> {
        let InputState::RubberBanding { anchor, erase } = self.interaction.input_state else {
            return None;
        };
        if let Some(region) = erase {
            self.drawing.clear_rect(region);
        }
        self.interaction.input_state.reset();
        if !event.is_primary() {
            tracing::debug!("Rubber band cancelled by non-primary release");
            return None;
        }

        let pos = self.document_pos(event);
        let (dx, dy) = pos.delta_from(anchor);
        Some(DrawnBand {
            anchor,
            width: dx.abs(),
            height: dy.abs(),
        })
    }
}
