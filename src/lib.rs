//! Interactive area-layout engine of the ipl WYSIWYG editor.
//!
//! A document is a free-form collection of rectangular areas, rich-text blocks
//! and images, positioned on a scrollable workspace. This crate owns the
//! geometry, hit testing, the mode-driven pointer state machine and the
//! scroll synchronization of text widgets. Rendering, the rich-text widget and
//! the real event sources belong to the host, reached through [`host::Host`],
//! [`canvas::DrawingSurface`] and [`widget::WidgetFactory`].
//!
//! ```ignore
//! let mut editor = ipl_editor::create_editor("editor", host, surface, widgets, settings);
//! editor.handle_event(EditorEvent::PointerMove(PointerEvent::primary(120.0, 40.0)));
//! editor.modebar_clicked("createText")?;
//! ```

pub mod app;
pub mod area;
pub mod canvas;
pub mod constants;
pub mod geometry;
pub mod host;
pub mod input;
pub mod logging;
pub mod modebar;
pub mod modes;
pub mod notifications;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod surface;
pub mod widget;

pub use app::Editor;
pub use area::{Area, AreaId, AreaKind, AreaTag, BorderKind};
pub use geometry::{Point, Rect, Size, Zone, classify};
pub use input::{EditorEvent, PointerButton, PointerEvent};
pub use modes::Mode;
pub use surface::{HitResult, LayoutSurface};

use canvas::DrawingSurface;
use host::Host;
use settings::EditorSettings;
use widget::WidgetFactory;

/// Create an editor instance mounted in the container `container_id`.
///
/// Every call yields an independent editor; there is no global editor state.
pub fn create_editor(
    container_id: impl Into<String>,
    host: Box<dyn Host>,
    surface: Box<dyn DrawingSurface>,
    widgets: Box<dyn WidgetFactory>,
    settings: EditorSettings,
) -> Editor {
    Editor::new(container_id, host, surface, widgets, settings)
}
