//! Geometry primitives and point classification.
//!
//! Everything here lives in the document coordinate system: the client space
//! of the workspace, independent of how far the workspace or the page is
//! scrolled. See [`crate::input::coords`] for the conversion from pointer
//! positions.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`
    #[inline]
    pub fn delta_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis aligned rectangle, `top`/`left` being its upper left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Rectangle spanned by two corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top: a.y.min(b.y),
            left: a.x.min(b.x),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Grow the rectangle by `d` on every side.
    pub fn inflate(&self, d: f32) -> Self {
        Self {
            top: self.top - d,
            left: self.left - d,
            width: self.width + 2.0 * d,
            height: self.height + 2.0 * d,
        }
    }
}

/// Where a point lies relative to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Top,
    Bottom,
    Left,
    Right,
    Inside,
    Outside,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Top => "top",
            Zone::Bottom => "bottom",
            Zone::Left => "left",
            Zone::Right => "right",
            Zone::Inside => "inside",
            Zone::Outside => "outside",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `(x, y)` against `rect` with an unsharpness of `tolerance`.
///
/// Anything not strictly inside the rectangle grown by `tolerance` is
/// [`Zone::Outside`]. In the corners `Left` and `Right` win over `Top` and
/// `Bottom`, so a corner always resizes horizontally.
pub fn classify(rect: &Rect, tolerance: f32, x: f32, y: f32) -> Zone {
    let in_stripe = x > rect.left - tolerance && x < rect.right() + tolerance;
    let in_band = y > rect.top - tolerance && y < rect.bottom() + tolerance;
    if !(in_stripe && in_band) {
        return Zone::Outside;
    }
    if x < rect.left + tolerance {
        Zone::Left
    } else if x > rect.right() - tolerance {
        Zone::Right
    } else if y < rect.top + tolerance {
        Zone::Top
    } else if y > rect.bottom() - tolerance {
        Zone::Bottom
    } else {
        Zone::Inside
    }
}
