//! Areas - the positioned rectangular blocks of a document.
//!
//! An [`Area`] owns its position and width. What it contains is described by
//! [`AreaKind`]: a text area holds a rich-text widget and derives its height
//! from the widget's content, an image area stores an explicit height.
//! Behaviour that differs between the two is dispatched on [`AreaTag`].

use crate::constants::{AREA_EDITOR_ELEMENT_PREFIX, AREA_ELEMENT_PREFIX, HIDDEN_BORDER_COLOR};
use crate::geometry::{Point, Rect, Zone, classify};
use crate::settings::BorderColors;
use crate::widget::{RichTextWidget, WidgetError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier assigned when an area is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AreaId(pub u64);

impl AreaId {
    /// Id of the host element representing the area
    pub fn element_id(&self) -> String {
        format!("{}{}", AREA_ELEMENT_PREFIX, self.0)
    }

    /// Id of the host element the area's rich-text widget is mounted on
    pub fn editor_element_id(&self) -> String {
        format!("{}{}", AREA_EDITOR_ELEMENT_PREFIX, self.0)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requested border presentation. The colour is derived from it on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderKind {
    None,
    Selected,
    #[default]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaTag {
    Text,
    Image,
}

impl AreaTag {
    /// Hit-test rank: lower ranks are tested first.
    pub fn precedence(&self) -> u8 {
        match self {
            AreaTag::Text => 0,
            AreaTag::Image => 1,
        }
    }

    pub fn default_border_color<'a>(&self, colors: &'a BorderColors) -> &'a str {
        match self {
            AreaTag::Text => &colors.text,
            AreaTag::Image => &colors.image,
        }
    }
}

/// The widget of a text area, once its creation has settled.
pub enum WidgetSlot {
    Ready(Box<dyn RichTextWidget>),
    Failed(WidgetError),
}

impl WidgetSlot {
    pub fn widget_mut(&mut self) -> Option<&mut (dyn RichTextWidget + 'static)> {
        match self {
            WidgetSlot::Ready(widget) => Some(widget.as_mut()),
            WidgetSlot::Failed(_) => None,
        }
    }
}

impl fmt::Debug for WidgetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetSlot::Ready(_) => f.write_str("Ready"),
            WidgetSlot::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
        }
    }
}

#[derive(Debug)]
pub struct TextBody {
    pub widget: WidgetSlot,
    /// Some part of the area is inside the visible workspace span
    pub visible: bool,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBody {
    /// Reference to the displayed image, if one was assigned
    pub source: Option<String>,
    pub height: f32,
}

#[derive(Debug)]
pub enum AreaKind {
    Text(TextBody),
    Image(ImageBody),
}

impl AreaKind {
    pub fn tag(&self) -> AreaTag {
        match self {
            AreaKind::Text(_) => AreaTag::Text,
            AreaKind::Image(_) => AreaTag::Image,
        }
    }
}

#[derive(Debug)]
pub struct Area {
    pub id: AreaId,
    pub position: Point,
    pub width: f32,
    pub kind: AreaKind,
    pub border: BorderKind,
}

impl Area {
    /// A text area around an already settled widget. Starts read-only.
    pub fn text(id: AreaId, top: f32, left: f32, width: f32, widget: WidgetSlot) -> Self {
        let mut area = Self {
            id,
            position: Point::new(left, top),
            width,
            kind: AreaKind::Text(TextBody {
                widget,
                visible: false,
                read_only: false,
            }),
            border: BorderKind::Default,
        };
        area.set_read_only(true);
        area
    }

    pub fn image(id: AreaId, top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            position: Point::new(left, top),
            width,
            kind: AreaKind::Image(ImageBody {
                source: None,
                height,
            }),
            border: BorderKind::Default,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        if let AreaKind::Image(body) = &mut self.kind {
            body.source = Some(source.into());
        }
        self
    }

    #[inline]
    pub fn tag(&self) -> AreaTag {
        self.kind.tag()
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, AreaKind::Text(_))
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// Current height: the widget content for text, the stored height for images.
    pub fn height(&self) -> f32 {
        match &self.kind {
            AreaKind::Text(body) => match &body.widget {
                WidgetSlot::Ready(widget) => widget.content_height(),
                WidgetSlot::Failed(_) => 0.0,
            },
            AreaKind::Image(body) => body.height,
        }
    }

    /// The area's rectangle in document coordinates, read from the live state.
    pub fn bounding_rect(&self) -> Rect {
        Rect::new(self.top(), self.left(), self.width, self.height())
    }

    pub fn hit_zone(&self, tolerance: f32, x: f32, y: f32) -> Zone {
        classify(&self.bounding_rect(), tolerance, x, y)
    }

    /// Translate without any bounds check; areas may leave the canvas.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    pub fn resize_right(&mut self, dx: f32) {
        self.width += dx;
    }

    /// Move the left edge, keeping the right edge in place.
    pub fn resize_left(&mut self, dx: f32) {
        self.position.x += dx;
        self.width -= dx;
    }

    pub fn set_border(&mut self, kind: BorderKind) {
        self.border = kind;
    }

    pub fn border_color<'a>(&self, colors: &'a BorderColors) -> &'a str {
        match self.border {
            BorderKind::None => HIDDEN_BORDER_COLOR,
            BorderKind::Selected => &colors.selected,
            BorderKind::Default => self.tag().default_border_color(colors),
        }
    }

    // ------------------------------------------------------------------------
    // Text capabilities (no-ops on images)
    // ------------------------------------------------------------------------

    pub fn set_read_only(&mut self, read_only: bool) {
        if let AreaKind::Text(body) = &mut self.kind {
            body.read_only = read_only;
            if let Some(widget) = body.widget.widget_mut() {
                widget.set_read_only(read_only);
            }
        }
    }

    pub fn is_read_only(&self) -> Option<bool> {
        match &self.kind {
            AreaKind::Text(body) => Some(body.read_only),
            AreaKind::Image(_) => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        match &self.kind {
            AreaKind::Text(body) => body.visible,
            AreaKind::Image(_) => false,
        }
    }

    /// True if part of the area lies within the visible vertical span of the
    /// workspace scrolled to `scroll_top`.
    pub fn check_visible(&self, scroll_top: f32, viewport_height: f32) -> bool {
        let top = self.top();
        if top - scroll_top > viewport_height {
            return false;
        }
        top + self.height() - scroll_top >= 0.0
    }

    /// Enable a text area that scrolled into view, disable one that left it.
    ///
    /// Returns true when the visibility changed. Repeated calls without a
    /// change never touch the widget.
    pub fn set_visibility(&mut self, scroll_top: f32, viewport_height: f32) -> bool {
        let now_visible = self.check_visible(scroll_top, viewport_height);
        let was_visible = match &self.kind {
            AreaKind::Text(body) => body.visible,
            AreaKind::Image(_) => return false,
        };
        if now_visible == was_visible {
            return false;
        }
        self.set_read_only(!now_visible);
        if let AreaKind::Text(body) = &mut self.kind {
            body.visible = now_visible;
        }
        true
    }

    /// Record visibility without touching writability.
    pub fn mark_visible(&mut self, visible: bool) {
        if let AreaKind::Text(body) = &mut self.kind {
            body.visible = visible;
        }
    }

    /// Keep the floating toolbar below `top` (on-screen Y of the workspace).
    pub fn set_sticky_position(&mut self, top: f32) {
        if let AreaKind::Text(body) = &mut self.kind {
            if let Some(widget) = body.widget.widget_mut() {
                widget.set_toolbar_top_offset(top);
            }
        }
    }
}
