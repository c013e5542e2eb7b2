//! The layout surface: the ordered collection of all areas of a document.
//!
//! Insertion order is kept and indices are stable (areas are never removed).
//! Hit testing walks text areas before image areas, so a text area lying on
//! top of an image always wins.

use crate::area::{Area, AreaId, BorderKind, WidgetSlot};
use crate::geometry::Zone;
use crate::profile_scope;

/// Result of classifying a point against the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    pub index: Option<usize>,
    pub zone: Zone,
}

impl HitResult {
    pub const OUTSIDE: HitResult = HitResult {
        index: None,
        zone: Zone::Outside,
    };
}

#[derive(Debug, Default)]
pub struct LayoutSurface {
    areas: Vec<Area>,
    next_id: u64,
}

impl LayoutSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn get(&self, index: usize) -> Option<&Area> {
        self.areas.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Area> {
        self.areas.get_mut(index)
    }

    pub fn index_of(&self, id: AreaId) -> Option<usize> {
        self.areas.iter().position(|a| a.id == id)
    }

    pub fn by_id(&self, id: AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn by_id_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.areas.iter_mut().find(|a| a.id == id)
    }

    /// Reserve the id of an area whose construction is about to start.
    pub fn allocate_id(&mut self) -> AreaId {
        let id = AreaId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Indices in hit-test order: text areas first, each kind in insertion order.
    pub fn precedence_order(&self) -> impl Iterator<Item = usize> + '_ {
        let mut order: Vec<usize> = (0..self.areas.len()).collect();
        order.sort_by_key(|&i| self.areas[i].tag().precedence());
        order.into_iter()
    }

    /// First area (in precedence order) the point is not outside of.
    pub fn hit_test(&self, tolerance: f32, x: f32, y: f32) -> HitResult {
        profile_scope!("hit_test");
        for index in self.precedence_order() {
            let zone = self.areas[index].hit_zone(tolerance, x, y);
            if zone != Zone::Outside {
                return HitResult {
                    index: Some(index),
                    zone,
                };
            }
        }
        HitResult::OUTSIDE
    }

    /// Register a text area whose widget creation has settled.
    pub fn push_text_area(
        &mut self,
        id: AreaId,
        top: f32,
        left: f32,
        width: f32,
        widget: WidgetSlot,
    ) -> usize {
        self.areas.push(Area::text(id, top, left, width, widget));
        self.areas.len() - 1
    }

    /// Add an image area. Non-positive geometry creates nothing.
    pub fn add_image_area(&mut self, top: f32, left: f32, width: f32, height: f32) -> Option<AreaId> {
        if width <= 0.0 || height <= 0.0 {
            tracing::debug!(width, height, "Ignoring image area without extent");
            return None;
        }
        let id = self.allocate_id();
        self.areas.push(Area::image(id, top, left, width, height));
        Some(id)
    }

    pub fn set_all_borders(&mut self, kind: BorderKind) {
        for area in &mut self.areas {
            area.set_border(kind);
        }
    }

    /// Toggle every text widget; image areas are unaffected.
    pub fn set_all_read_only(&mut self, read_only: bool) {
        for area in &mut self.areas {
            area.set_read_only(read_only);
        }
    }

    pub fn text_areas_mut(&mut self) -> impl Iterator<Item = &mut Area> {
        self.areas.iter_mut().filter(|a| a.is_text())
    }

    pub fn visible_text_areas_mut(&mut self) -> impl Iterator<Item = &mut Area> {
        self.text_areas_mut().filter(|a| a.is_visible())
    }
}
