//! Mode transitions: exclusive bindings, modebar sync, per-mode side effects.

use crate::helpers::EditorFixture;
use ipl_editor::modes::Handler;
use ipl_editor::{BorderKind, EditorEvent, Mode, Size};

fn borders(fx: &EditorFixture) -> Vec<BorderKind> {
    fx.editor.layout().areas().iter().map(|a| a.border).collect()
}

#[test]
fn test_editor_starts_in_select_mode() {
    let fx = EditorFixture::new();
    assert_eq!(fx.editor.mode(), Mode::Select);
    assert_eq!(fx.editor.modebar().active(), Some(Mode::Select));
    assert_eq!(fx.editor.container_id(), "editor");

    let subs = fx.editor.subscriptions();
    assert!(subs.is_attached(Handler::WindowResize));
    assert!(subs.is_attached(Handler::AreaPointerMove));
    assert!(subs.is_attached(Handler::AreaPointerDown));
    assert!(subs.is_attached(Handler::AreaPointerUp));
    assert_eq!(subs.active().len(), 4);
}

#[test]
fn test_surface_sized_to_workspace() {
    let fx = EditorFixture::new();
    assert_eq!(fx.surface.size(), Size::new(800.0, 396.0));
}

#[test]
fn test_same_mode_is_a_no_op() {
    let mut fx = EditorFixture::new();
    let attached = fx.editor.subscriptions().attach_count();
    let detached = fx.editor.subscriptions().detach_count();

    fx.editor.set_mode(Mode::Select);
    fx.editor.modebar_clicked("select").unwrap();

    assert_eq!(fx.editor.subscriptions().attach_count(), attached);
    assert_eq!(fx.editor.subscriptions().detach_count(), detached);
}

#[test]
fn test_bindings_are_exclusive() {
    let mut fx = EditorFixture::new();
    fx.editor.modebar_clicked("createText").unwrap();

    let subs = fx.editor.subscriptions();
    assert!(!subs.is_attached(Handler::AreaPointerMove));
    assert!(subs.is_attached(Handler::NewAreaPointerDown));
    assert!(subs.is_attached(Handler::NewTextPointerUp));
    assert!(!subs.is_attached(Handler::NewImagePointerUp));
    assert_eq!(subs.detach_count(), 3);

    fx.editor.modebar_clicked("createImage").unwrap();
    let subs = fx.editor.subscriptions();
    assert!(!subs.is_attached(Handler::NewTextPointerUp));
    assert!(subs.is_attached(Handler::NewImagePointerUp));
}

#[test]
fn test_text_edit_binds_scroll_handlers() {
    let mut fx = EditorFixture::new();
    fx.editor.modebar_clicked("textEdit").unwrap();

    let subs = fx.editor.subscriptions();
    assert!(subs.is_attached(Handler::ContainerScroll));
    assert!(subs.is_attached(Handler::WindowScroll));
    assert!(subs.is_attached(Handler::WindowResize));
    assert_eq!(subs.active().len(), 3);
}

#[test]
fn test_modebar_follows_mode() {
    let mut fx = EditorFixture::new();
    fx.editor.modebar_clicked("freeDraw").unwrap();
    assert_eq!(fx.editor.mode(), Mode::FreeDraw);

    let active: Vec<_> = fx
        .editor
        .modebar()
        .buttons()
        .iter()
        .filter(|b| b.active)
        .map(|b| b.mode)
        .collect();
    assert_eq!(active, vec![Mode::FreeDraw]);
}

#[test]
fn test_unknown_modebar_id_keeps_mode() {
    let mut fx = EditorFixture::new();
    assert!(fx.editor.modebar_clicked("lasso").is_err());
    assert_eq!(fx.editor.mode(), Mode::Select);
    assert_eq!(fx.editor.modebar().active(), Some(Mode::Select));
}

#[test]
fn test_free_draw_hides_borders() {
    let mut fx = EditorFixture::new();
    fx.image_area(0.0, 0.0, 100.0, 100.0);
    fx.text_area(0.0, 200.0, 100.0);

    fx.editor.set_mode(Mode::FreeDraw);
    assert_eq!(borders(&fx), vec![BorderKind::None, BorderKind::None]);

    // Areas added meanwhile stay hidden too.
    fx.image_area(300.0, 0.0, 100.0, 100.0);
    assert_eq!(borders(&fx)[2], BorderKind::None);

    fx.editor.set_mode(Mode::Select);
    assert_eq!(borders(&fx), vec![BorderKind::Default; 3]);
}

#[test]
fn test_free_draw_ignores_pointer() {
    let mut fx = EditorFixture::new();
    let id = fx.image_area(0.0, 0.0, 100.0, 100.0);
    fx.editor.set_mode(Mode::FreeDraw);

    fx.drag((50.0, 50.0), (80.0, 80.0));
    assert_eq!(fx.rect(id).left, 0.0);
    assert!(fx.surface.stroked().is_empty());
}

#[test]
fn test_highlight_cleared_on_mode_change() {
    let mut fx = EditorFixture::new();
    fx.image_area(0.0, 0.0, 100.0, 100.0);
    fx.pointer_move(50.0, 50.0);
    assert_eq!(borders(&fx), vec![BorderKind::Selected]);

    fx.editor.set_mode(Mode::CreateImage);
    assert_eq!(borders(&fx), vec![BorderKind::Default]);
    assert!(fx.editor.interaction().location.is_none());
}

#[test]
fn test_window_resize_in_every_mode() {
    let mut fx = EditorFixture::new();
    for mode in Mode::ALL {
        fx.editor.set_mode(mode);
        let width = 500.0 + fx.surface.size().width;
        fx.host.set_client_width(width);
        fx.editor.handle_event(EditorEvent::WindowResize);
        assert_eq!(fx.surface.size().width, width, "resize not handled in {mode}");
        assert_eq!(fx.surface.size().height, 396.0);
    }
}

#[test]
fn test_editors_are_independent() {
    let mut first = EditorFixture::new();
    let second = EditorFixture::new();
    first.image_area(0.0, 0.0, 100.0, 100.0);
    first.editor.set_mode(Mode::TextEdit);

    assert_eq!(second.editor.layout().len(), 0);
    assert_eq!(second.editor.mode(), Mode::Select);
}
