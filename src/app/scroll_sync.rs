//! Scroll and resize synchronization.
//!
//! - window resize: the drawing surface follows the workspace width
//! - workspace scroll (text mode): text areas are enabled while visible and
//!   the drawing surface grows with the scrolled depth
//! - page scroll (text mode): floating toolbars stay below the workspace top

use super::state::Editor;
use crate::canvas;
use crate::perf::measure_and_log;

/// Scroll handlers slower than this are reported
const SCROLL_SYNC_THRESHOLD_MS: f64 = 8.0;

impl Editor {
    pub(crate) fn handle_window_resize(&mut self) {
        let width = self.host.workspace_client_size().width;
        canvas::fit_width(self.drawing.as_mut(), width);
    }

    pub(crate) fn handle_container_scroll(&mut self) {
        measure_and_log("container_scroll", SCROLL_SYNC_THRESHOLD_MS, || {
            self.sync_visibility();
            let scroll_top = self.host.workspace_scroll().y;
            self.sync.recorded_depth =
                canvas::grow_with_scroll(self.drawing.as_mut(), self.sync.recorded_depth, scroll_top);
        });
    }

    pub(crate) fn handle_window_scroll(&mut self) {
        let top = self.host.workspace_origin().y;
        for area in self.layout.visible_text_areas_mut() {
            area.set_sticky_position(top);
        }
    }

    /// Re-evaluate visibility of every text area against the workspace.
    ///
    /// Only transitions touch writability. Returns the number of transitions.
    pub(crate) fn sync_visibility(&mut self) -> usize {
        let scroll_top = self.host.workspace_scroll().y;
        let viewport_height = self.host.workspace_client_size().height;
        let mut transitions = 0;
        for area in self.layout.text_areas_mut() {
            if area.set_visibility(scroll_top, viewport_height) {
                tracing::debug!(area = %area.id, visible = area.is_visible(), "Visibility changed");
                transitions += 1;
            }
        }
        transitions
    }
}
