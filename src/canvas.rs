//! The drawing surface layered over the workspace.
//!
//! Only the create modes draw on it (the rubber band). Its width follows the
//! workspace, its height grows with the scrolled document and never shrinks.

use crate::geometry::{Rect, Size};
use crate::settings::StrokeStyle;

pub trait DrawingSurface {
    fn size(&self) -> Size;

    /// Set the backing dimensions (not a CSS scale).
    fn resize(&mut self, size: Size);

    fn clear_rect(&mut self, rect: Rect);

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle);
}

/// Surface width after the window was resized.
pub fn fit_width(surface: &mut dyn DrawingSurface, workspace_width: f32) {
    let size = surface.size();
    if size.width != workspace_width {
        surface.resize(Size::new(workspace_width, size.height));
    }
}

/// Grow the surface height when the document scrolled deeper than before.
///
/// Returns the new recorded scroll depth.
pub fn grow_with_scroll(surface: &mut dyn DrawingSurface, recorded_depth: f32, scroll_top: f32) -> f32 {
    if scroll_top <= recorded_depth {
        return recorded_depth;
    }
    let size = surface.size();
    let height = size.height + scroll_top - recorded_depth;
    tracing::debug!(height, "Surface grows with scroll depth");
    surface.resize(Size::new(size.width, height));
    scroll_top
}
