//! Conversion of pointer positions into document coordinates.
//!
//! Pointer events report viewport (client) positions. Document coordinates
//! must not move when the page scrolls or when the workspace scrolls its
//! content, so both are compensated here.

use crate::geometry::Point;
use crate::host::Host;

/// Workspace geometry needed for coordinate conversions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateContext {
    /// On-screen position of the workspace
    pub origin: Point,
    /// Scroll offset of the workspace content
    pub scroll: Point,
}

impl CoordinateContext {
    #[inline]
    pub fn new(origin: Point, scroll: Point) -> Self {
        Self { origin, scroll }
    }

    /// Read the current geometry from the host
    pub fn from_host(host: &dyn Host) -> Self {
        Self::new(host.workspace_origin(), host.workspace_scroll())
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a client position to document coordinates
    #[inline]
    pub fn client_to_document(client: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            client.x - ctx.origin.x + ctx.scroll.x,
            client.y - ctx.origin.y + ctx.scroll.y,
        )
    }

    /// Convert document coordinates back to a client position
    #[inline]
    pub fn document_to_client(doc: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            doc.x + ctx.origin.x - ctx.scroll.x,
            doc.y + ctx.origin.y - ctx.scroll.y,
        )
    }
}
