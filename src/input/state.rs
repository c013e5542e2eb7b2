//! Input state machine for pointer gestures within a mode.
//!
//! ## State Transitions
//!
//! ```text
//! select mode
//!   Idle         -> Hovering       (pointer enters an area)
//!   Hovering     -> Hovering       (other area or other zone)
//!   Hovering     -> Idle           (pointer leaves all areas)
//!   Hovering     -> Manipulating   (primary button down)
//!   Manipulating -> Hovering       (primary button up)
//!
//! create modes
//!   Idle          -> RubberBanding (pointer down)
//!   RubberBanding -> Idle          (pointer up, area created or discarded)
//!
//! Any -> Idle                      (mode change)
//! ```

use crate::geometry::{Point, Rect, Zone};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No area active, no gesture in progress
    #[default]
    Idle,

    /// An area is highlighted under the pointer
    Hovering { index: usize, zone: Zone },

    /// The highlighted area is being moved or resized
    Manipulating {
        index: usize,
        /// Zone captured at pointer down; decides move vs. resize
        zone: Zone,
        /// Pointer position of the previous update
        anchor: Point,
    },

    /// A new area is being dragged out
    RubberBanding {
        anchor: Point,
        /// Region covering the rubber band drawn last, if any
        erase: Option<Rect>,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_manipulating(&self) -> bool {
        matches!(self, Self::Manipulating { .. })
    }

    pub fn is_rubber_banding(&self) -> bool {
        matches!(self, Self::RubberBanding { .. })
    }

    /// Index of the highlighted area, whether or not it is being manipulated
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Hovering { index, .. } | Self::Manipulating { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn active_zone(&self) -> Option<Zone> {
        match self {
            Self::Hovering { zone, .. } | Self::Manipulating { zone, .. } => Some(*zone),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Manipulating { anchor, .. } | Self::RubberBanding { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    pub fn erase_region(&self) -> Option<Rect> {
        match self {
            Self::RubberBanding { erase, .. } => *erase,
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn hover(&mut self, index: usize, zone: Zone) {
        *self = Self::Hovering { index, zone };
    }

    /// Start moving/resizing the hovered area. No effect unless hovering.
    pub fn start_manipulating(&mut self, zone: Zone, anchor: Point) {
        if let Self::Hovering { index, .. } | Self::Manipulating { index, .. } = *self {
            *self = Self::Manipulating {
                index,
                zone,
                anchor,
            };
        }
    }

    /// End the gesture, keeping the area highlighted.
    pub fn stop_manipulating(&mut self) {
        if let Self::Manipulating { index, zone, .. } = *self {
            *self = Self::Hovering { index, zone };
        }
    }

    pub fn set_anchor(&mut self, pos: Point) {
        if let Self::Manipulating { anchor, .. } | Self::RubberBanding { anchor, .. } = self {
            *anchor = pos;
        }
    }

    pub fn start_rubber_band(&mut self, anchor: Point) {
        *self = Self::RubberBanding {
            anchor,
            erase: None,
        };
    }

    pub fn set_erase_region(&mut self, region: Rect) {
        if let Self::RubberBanding { erase, .. } = self {
            *erase = Some(region);
        }
    }
}
