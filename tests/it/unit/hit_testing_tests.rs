//! Unit tests for zone classification and collection hit testing.

use crate::helpers::EditorFixture;
use ipl_editor::constants::AREA_LOCATION_TOLERANCE;
use ipl_editor::{HitResult, LayoutSurface, Rect, Zone, classify};

const TOL: f32 = AREA_LOCATION_TOLERANCE;

fn banner() -> LayoutSurface {
    let mut layout = LayoutSurface::new();
    layout.add_image_area(0.0, 0.0, 600.0, 50.0).unwrap();
    layout
}

// ============================================================================
// classify
// ============================================================================

#[test]
fn test_classify_edges_and_inside() {
    let rect = Rect::new(100.0, 100.0, 200.0, 80.0);
    assert_eq!(classify(&rect, TOL, 150.0, 140.0), Zone::Inside);
    assert_eq!(classify(&rect, TOL, 102.0, 140.0), Zone::Left);
    assert_eq!(classify(&rect, TOL, 298.0, 140.0), Zone::Right);
    assert_eq!(classify(&rect, TOL, 150.0, 101.0), Zone::Top);
    assert_eq!(classify(&rect, TOL, 150.0, 178.0), Zone::Bottom);
    assert_eq!(classify(&rect, TOL, 50.0, 140.0), Zone::Outside);
}

#[test]
fn test_classify_boundaries_are_exclusive() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    // The tolerance band reaches past the edge, but not onto its border.
    assert_eq!(classify(&rect, TOL, 0.0, 50.0), Zone::Left);
    assert_eq!(classify(&rect, TOL, -5.0, 50.0), Zone::Outside);
    assert_eq!(classify(&rect, TOL, 105.0, 50.0), Zone::Outside);
    assert_eq!(classify(&rect, TOL, 50.0, -5.0), Zone::Outside);
    // Exactly tolerance away from the edge is no longer the edge band.
    assert_eq!(classify(&rect, TOL, 5.0, 50.0), Zone::Inside);
    assert_eq!(classify(&rect, TOL, 95.0, 50.0), Zone::Inside);
}

#[test]
fn test_classify_corner_prefers_horizontal_edges() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(classify(&rect, TOL, 2.0, 2.0), Zone::Left);
    assert_eq!(classify(&rect, TOL, 98.0, 98.0), Zone::Right);
}

// ============================================================================
// LayoutSurface::hit_test
// ============================================================================

#[test]
fn test_banner_zones() {
    let layout = banner();
    assert_eq!(
        layout.hit_test(TOL, 300.0, 10.0),
        HitResult {
            index: Some(0),
            zone: Zone::Inside
        }
    );
    assert_eq!(layout.hit_test(TOL, 598.0, 10.0).zone, Zone::Right);
    assert_eq!(layout.hit_test(TOL, 300.0, -10.0), HitResult::OUTSIDE);
}

#[test]
fn test_empty_collection_is_outside() {
    let layout = LayoutSurface::new();
    assert_eq!(layout.hit_test(TOL, 0.0, 0.0), HitResult::OUTSIDE);
}

#[test]
fn test_first_image_in_insertion_order_wins() {
    let mut layout = LayoutSurface::new();
    layout.add_image_area(0.0, 0.0, 200.0, 200.0).unwrap();
    layout.add_image_area(50.0, 50.0, 200.0, 200.0).unwrap();
    assert_eq!(layout.hit_test(TOL, 100.0, 100.0).index, Some(0));
    assert_eq!(layout.hit_test(TOL, 220.0, 220.0).index, Some(1));
}

#[test]
fn test_text_wins_over_overlapping_image() {
    let mut fx = EditorFixture::new();
    fx.image_area(0.0, 0.0, 300.0, 300.0);
    let text = fx.text_area(50.0, 50.0, 200.0);

    let layout = fx.editor.layout();
    let hit = layout.hit_test(TOL, 100.0, 100.0);
    assert_eq!(hit.index, layout.index_of(text));
    assert_eq!(hit.zone, Zone::Inside);

    // Outside the text area the image is still found.
    assert_eq!(layout.hit_test(TOL, 280.0, 280.0).index, Some(0));
}

#[test]
fn test_text_height_follows_widget_content() {
    let mut fx = EditorFixture::new();
    let text = fx.text_area(0.0, 0.0, 200.0);
    assert_eq!(fx.editor.layout().hit_test(TOL, 100.0, 150.0), HitResult::OUTSIDE);

    fx.widgets.set_height(text, 200.0);
    assert_eq!(fx.editor.layout().hit_test(TOL, 100.0, 150.0).zone, Zone::Inside);
}
