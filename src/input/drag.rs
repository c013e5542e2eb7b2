//! Pointer move handling - hover highlighting, move/resize, rubber band.
//!
//! Pointer move fires for every pixel of a gesture and hit-tests the whole
//! collection each time; enable the `profiling` feature to time it.

use super::{InputState, PointerEvent};
use crate::app::Editor;
use crate::area::BorderKind;
use crate::constants::RUBBER_BAND_ERASE_PADDING;
use crate::geometry::{Rect, Zone};
use crate::host::CursorStyle;
use crate::profile_scope;

impl Editor {
    /// Select mode pointer move.
    pub(crate) fn handle_area_pointer_move(&mut self, event: &PointerEvent) {
        profile_scope!("area_pointer_move");

        let pos = self.document_pos(event);
        let location = self.layout.hit_test(self.settings.tolerance, pos.x, pos.y);
        self.interaction.location = Some(location);

        match self.interaction.input_state {
            InputState::Manipulating { index, zone, anchor } => {
                // Deltas are incremental: the anchor follows the pointer.
                let (dx, dy) = pos.delta_from(anchor);
                if let Some(area) = self.layout.get_mut(index) {
                    match zone {
                        Zone::Inside => area.move_by(dx, dy),
                        Zone::Left => area.resize_left(dx),
                        Zone::Right => area.resize_right(dx),
                        _ => {}
                    }
                }
                self.interaction.input_state.set_anchor(pos);
            }
            InputState::Hovering { index, zone } => match location.index {
                None => {
                    self.set_area_border(index, BorderKind::Default);
                    self.interaction.input_state.reset();
                    self.host.set_cursor(CursorStyle::Default);
                }
                Some(hit) if hit != index => {
                    self.set_area_border(index, BorderKind::Default);
                    self.set_area_border(hit, BorderKind::Selected);
                    self.interaction.input_state.hover(hit, location.zone);
                    self.host.set_cursor(CursorStyle::for_zone(location.zone));
                }
                Some(_) => {
                    if location.zone != zone {
                        self.interaction.input_state.hover(index, location.zone);
                        self.host.set_cursor(CursorStyle::for_zone(location.zone));
                    }
                }
            },
            InputState::Idle | InputState::RubberBanding { .. } => {
                if let Some(hit) = location.index {
                    self.interaction.input_state.hover(hit, location.zone);
                    self.set_area_border(hit, BorderKind::Selected);
                    self.host.set_cursor(CursorStyle::for_zone(location.zone));
                }
            }
        }
    }

    /// Create modes: redraw the rubber band from the anchor to the pointer.
    pub(crate) fn handle_new_area_pointer_move(&mut self, event: &PointerEvent) {
        let InputState::RubberBanding { anchor, erase } = self.interaction.input_state else {
            return;
        };
        let pos = self.document_pos(event);
        if let Some(region) = erase {
            self.drawing.clear_rect(region);
        }
        let band = Rect::from_corners(anchor, pos);
        self.drawing.stroke_rect(band, &self.settings.rubber_band);
        self.interaction
            .input_state
            .set_erase_region(band.inflate(RUBBER_BAND_ERASE_PADDING));
    }

    fn set_area_border(&mut self, index: usize, kind: BorderKind) {
        if let Some(area) = self.layout.get_mut(index) {
            area.set_border(kind);
        }
    }
}
