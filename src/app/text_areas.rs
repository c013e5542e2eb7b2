//! Area creation.
//!
//! Image areas are created synchronously. A text area only joins the layout
//! once its widget creation has settled, which is split into three steps so
//! that several creations can be in flight at once:
//!
//! 1. [`Editor::begin_text_area`] reserves an id and starts the creation,
//! 2. [`PendingTextArea::settle`] awaits it without borrowing the editor,
//! 3. [`Editor::finish_text_area`] registers the area.

use super::state::Editor;
use crate::area::{AreaId, WidgetSlot};
use crate::modes::Mode;
use crate::notifications::Notice;
use crate::widget::{RichTextWidget, WidgetError, WidgetFuture};
use futures::future::join_all;

/// A text area whose widget is still being created.
pub struct PendingTextArea {
    id: AreaId,
    top: f32,
    left: f32,
    width: f32,
    creation: WidgetFuture,
}

impl PendingTextArea {
    pub fn id(&self) -> AreaId {
        self.id
    }

    pub async fn settle(self) -> SettledTextArea {
        let widget = self.creation.await;
        SettledTextArea {
            id: self.id,
            top: self.top,
            left: self.left,
            width: self.width,
            widget,
        }
    }
}

/// Outcome of a widget creation, ready to be registered.
pub struct SettledTextArea {
    pub id: AreaId,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub widget: Result<Box<dyn RichTextWidget>, WidgetError>,
}

impl Editor {
    /// Start creating a text area. Non-positive widths create nothing.
    pub fn begin_text_area(&mut self, top: f32, left: f32, width: f32) -> Option<PendingTextArea> {
        if width <= 0.0 {
            tracing::debug!(width, "Ignoring text area without extent");
            return None;
        }
        let id = self.layout.allocate_id();
        let creation = self.widgets.create(&id.editor_element_id());
        Some(PendingTextArea {
            id,
            top,
            left,
            width,
            creation,
        })
    }

    /// Register a settled text area.
    ///
    /// A failed creation still registers the area, without a widget, and
    /// raises a blocking notice. It is not retried.
    pub fn finish_text_area(&mut self, settled: SettledTextArea) -> AreaId {
        let SettledTextArea {
            id,
            top,
            left,
            width,
            widget,
        } = settled;

        let slot = match widget {
            Ok(widget) => WidgetSlot::Ready(widget),
            Err(e) => {
                tracing::error!(area = %id, "Text widget creation failed: {}", e);
                self.notices.push(Notice::error(e.to_string()).blocking());
                WidgetSlot::Failed(e)
            }
        };

        let index = self.layout.push_text_area(id, top, left, width, slot);
        let origin_top = self.host.workspace_origin().y;
        let scroll_top = self.host.workspace_scroll().y;
        let viewport_height = self.host.workspace_client_size().height;
        let writable = self.modes.current == Mode::TextEdit;
        let border = self.default_border();

        if let Some(area) = self.layout.get_mut(index) {
            area.set_sticky_position(origin_top);
            let visible = area.check_visible(scroll_top, viewport_height);
            area.mark_visible(visible);
            area.set_read_only(!(writable && visible));
            area.set_border(border);
        }
        tracing::info!(area = %id, top, left, width, "Text area added");
        id
    }

    /// Create a text area and wait until it is usable.
    pub async fn add_text_area(&mut self, top: f32, left: f32, width: f32) -> Option<AreaId> {
        let pending = self.begin_text_area(top, left, width)?;
        let settled = pending.settle().await;
        Some(self.finish_text_area(settled))
    }

    /// Start a text area creation that [`Editor::settle_pending`] completes.
    pub fn queue_text_area(&mut self, top: f32, left: f32, width: f32) -> Option<AreaId> {
        let pending = self.begin_text_area(top, left, width)?;
        let id = pending.id();
        self.pending.push(pending);
        Some(id)
    }

    /// Await every queued creation concurrently and register the results.
    pub async fn settle_pending(&mut self) -> Vec<AreaId> {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return Vec::new();
        }
        let settled = join_all(pending.into_iter().map(PendingTextArea::settle)).await;
        settled
            .into_iter()
            .map(|s| self.finish_text_area(s))
            .collect()
    }

    pub fn add_image_area(&mut self, top: f32, left: f32, width: f32, height: f32) -> Option<AreaId> {
        let id = self.layout.add_image_area(top, left, width, height)?;
        let border = self.default_border();
        if let Some(area) = self.layout.by_id_mut(id) {
            area.set_border(border);
        }
        tracing::info!(area = %id, top, left, width, height, "Image area added");
        Some(id)
    }
}
