//! Rich-text widget boundary.
//!
//! The editing widget itself is an external collaborator. The editor only
//! needs to create one per text area, toggle it read-only, tell it how high
//! its floating toolbar may rise and ask how tall its content is.

use futures::future::LocalBoxFuture;
use thiserror::Error;

/// A live rich-text editing widget mounted on one text area.
pub trait RichTextWidget {
    fn set_read_only(&mut self, read_only: bool);

    /// The floating toolbar must not rise above this on-screen Y.
    fn set_toolbar_top_offset(&mut self, top: f32);

    /// Height of the rendered content; the height of the owning text area.
    fn content_height(&self) -> f32;
}

pub type WidgetFuture = LocalBoxFuture<'static, Result<Box<dyn RichTextWidget>, WidgetError>>;

/// Creates widgets on host elements.
///
/// The returned future must not borrow the factory: creations of several text
/// areas are awaited together while the editor keeps handling events.
pub trait WidgetFactory {
    fn create(&self, host_element: &str) -> WidgetFuture;
}

/// Errors raised while creating a rich-text widget
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// The host element the widget should replace does not exist
    #[error("Widget host element not found: {0}")]
    MissingElement(String),

    /// The widget implementation rejected the creation
    #[error("Widget creation failed: {0}")]
    CreationFailed(String),
}
