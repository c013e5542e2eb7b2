//! Editor-wide constants.
//!
//! Centralizes magic numbers and default colours. Most of them are only
//! defaults: the live values come from [`crate::settings::EditorSettings`].

// ============================================================================
// Geometry
// ============================================================================

/// Distance from an area edge within which the pointer counts as "on" that edge
pub const AREA_LOCATION_TOLERANCE: f32 = 5.0;

/// Minimum width (and image height) of an area created by a drag gesture
pub const MIN_AREA_SIZE: f32 = 40.0;

/// A create drag at most this wide is treated as an accidental click
pub const CLICK_THRESHOLD: f32 = 5.0;

/// Padding around the rubber band that is erased before it is redrawn
pub const RUBBER_BAND_ERASE_PADDING: f32 = 1.0;

/// The drawing surface is created this much shorter than the workspace
pub const SURFACE_BOTTOM_INSET: f32 = 4.0;

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Default border of text areas
pub const TEXT_AREA_BORDER_COLOR: &str = "#ccffcc";

/// Default border of image areas
pub const IMAGE_AREA_BORDER_COLOR: &str = "#ccccff";

/// Border of the area under the pointer in select mode
pub const SELECTED_AREA_BORDER_COLOR: &str = "#ffaaaa";

/// Border colour used when borders are hidden
pub const HIDDEN_BORDER_COLOR: &str = "transparent";

/// Rubber band stroke
pub const RUBBER_BAND_COLOR: &str = "red";

/// Rubber band line width
pub const RUBBER_BAND_LINE_WIDTH: f32 = 1.0;

/// Background of the active modebar button
pub const MODEBAR_ACTIVE_COLOR: &str = "#ffcccc";

/// Background of inactive modebar buttons
pub const MODEBAR_INACTIVE_COLOR: &str = "#ffffff";

// ============================================================================
// Element ids
// ============================================================================

/// Prefix of the host element id of an area
pub const AREA_ELEMENT_PREFIX: &str = "iplArea";

/// Prefix of the host element id a rich-text widget is mounted on
pub const AREA_EDITOR_ELEMENT_PREFIX: &str = "iplAreaEditor";
