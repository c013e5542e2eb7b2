//! Test helpers and fakes for driving an editor without a real host.
//!
//! This module provides:
//! - `FakeHost` - workspace geometry the test can change between events
//! - `RecordingSurface` - drawing surface that records every call
//! - `ScriptedWidgets` - widget factory whose widgets record their state
//! - `EditorFixture` - builder wiring the three into an `Editor`
//!
//! Pointer helpers on the fixture take document coordinates and convert them
//! to client positions with the current host geometry, so tests read in the
//! same space as the layout.

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{self, FutureExt};
use ipl_editor::canvas::DrawingSurface;
use ipl_editor::host::{CursorStyle, Host};
use ipl_editor::settings::{EditorSettings, StrokeStyle};
use ipl_editor::widget::{RichTextWidget, WidgetError, WidgetFactory, WidgetFuture};
use ipl_editor::{AreaId, Editor, EditorEvent, Point, PointerEvent, Rect, Size};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub const ORIGIN: Point = Point::new(10.0, 50.0);
pub const WORKSPACE: Size = Size::new(800.0, 400.0);
pub const WIDGET_HEIGHT: f32 = 100.0;

// ============================================================================
// FakeHost
// ============================================================================

#[derive(Debug)]
pub struct HostState {
    pub origin: Point,
    pub scroll: Point,
    pub client: Size,
    pub cursor: CursorStyle,
    pub cursor_changes: usize,
}

#[derive(Clone)]
pub struct FakeHost(pub Rc<RefCell<HostState>>);

impl FakeHost {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(HostState {
            origin: ORIGIN,
            scroll: Point::default(),
            client: WORKSPACE,
            cursor: CursorStyle::Default,
            cursor_changes: 0,
        })))
    }

    pub fn cursor(&self) -> CursorStyle {
        self.0.borrow().cursor
    }

    pub fn set_scroll_top(&self, top: f32) {
        self.0.borrow_mut().scroll.y = top;
    }

    pub fn set_origin(&self, origin: Point) {
        self.0.borrow_mut().origin = origin;
    }

    pub fn set_client_width(&self, width: f32) {
        self.0.borrow_mut().client.width = width;
    }
}

impl Host for FakeHost {
    fn workspace_origin(&self) -> Point {
        self.0.borrow().origin
    }

    fn workspace_scroll(&self) -> Point {
        self.0.borrow().scroll
    }

    fn workspace_client_size(&self) -> Size {
        self.0.borrow().client
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        let mut state = self.0.borrow_mut();
        state.cursor = cursor;
        state.cursor_changes += 1;
    }
}

// ============================================================================
// RecordingSurface
// ============================================================================

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub size: Size,
    pub resizes: Vec<Size>,
    pub cleared: Vec<Rect>,
    pub stroked: Vec<Rect>,
}

#[derive(Clone, Default)]
pub struct RecordingSurface(pub Rc<RefCell<SurfaceLog>>);

impl RecordingSurface {
    pub fn size(&self) -> Size {
        self.0.borrow().size
    }

    pub fn cleared(&self) -> Vec<Rect> {
        self.0.borrow().cleared.clone()
    }

    pub fn stroked(&self) -> Vec<Rect> {
        self.0.borrow().stroked.clone()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.0.borrow().size
    }

    fn resize(&mut self, size: Size) {
        let mut log = self.0.borrow_mut();
        log.size = size;
        log.resizes.push(size);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.0.borrow_mut().cleared.push(rect);
    }

    fn stroke_rect(&mut self, rect: Rect, _style: &StrokeStyle) {
        self.0.borrow_mut().stroked.push(rect);
    }
}

// ============================================================================
// ScriptedWidgets
// ============================================================================

#[derive(Debug)]
pub struct WidgetState {
    pub read_only: bool,
    /// Every value passed to `set_read_only`, in order
    pub read_only_calls: Vec<bool>,
    pub toolbar_offsets: Vec<f32>,
    pub height: f32,
}

struct FakeWidget(Rc<RefCell<WidgetState>>);

impl RichTextWidget for FakeWidget {
    fn set_read_only(&mut self, read_only: bool) {
        let mut state = self.0.borrow_mut();
        state.read_only = read_only;
        state.read_only_calls.push(read_only);
    }

    fn set_toolbar_top_offset(&mut self, top: f32) {
        self.0.borrow_mut().toolbar_offsets.push(top);
    }

    fn content_height(&self) -> f32 {
        self.0.borrow().height
    }
}

#[derive(Default)]
pub struct WidgetScript {
    /// Widgets by host element id
    pub widgets: HashMap<String, Rc<RefCell<WidgetState>>>,
    /// Element ids whose creation fails
    pub failing: HashSet<String>,
    /// Element ids whose creation waits for a signal
    pub deferred: HashMap<String, oneshot::Sender<()>>,
    pub defer_all: bool,
}

#[derive(Clone, Default)]
pub struct ScriptedWidgets(pub Rc<RefCell<WidgetScript>>);

impl ScriptedWidgets {
    pub fn fail(&self, id: AreaId) {
        self.0.borrow_mut().failing.insert(id.editor_element_id());
    }

    pub fn defer_all(&self) {
        self.0.borrow_mut().defer_all = true;
    }

    /// Let the deferred creation of `id` complete.
    pub fn release(&self, id: AreaId) {
        let sender = self.0.borrow_mut().deferred.remove(&id.editor_element_id());
        if let Some(sender) = sender {
            let _ = sender.send(());
        }
    }

    pub fn widget(&self, id: AreaId) -> Rc<RefCell<WidgetState>> {
        self.0.borrow().widgets[&id.editor_element_id()].clone()
    }

    pub fn read_only_calls(&self, id: AreaId) -> Vec<bool> {
        self.widget(id).borrow().read_only_calls.clone()
    }

    pub fn set_height(&self, id: AreaId, height: f32) {
        self.widget(id).borrow_mut().height = height;
    }
}

impl WidgetFactory for ScriptedWidgets {
    fn create(&self, host_element: &str) -> WidgetFuture {
        let mut script = self.0.borrow_mut();
        if script.failing.contains(host_element) {
            return future::ready(Err(WidgetError::CreationFailed(format!(
                "no editor for {host_element}"
            ))))
            .boxed_local();
        }

        let state = Rc::new(RefCell::new(WidgetState {
            read_only: false,
            read_only_calls: Vec::new(),
            toolbar_offsets: Vec::new(),
            height: WIDGET_HEIGHT,
        }));
        script.widgets.insert(host_element.to_string(), state.clone());
        let widget: Box<dyn RichTextWidget> = Box::new(FakeWidget(state));

        if script.defer_all {
            let (tx, rx) = oneshot::channel();
            script.deferred.insert(host_element.to_string(), tx);
            return async move {
                rx.await
                    .map_err(|_| WidgetError::CreationFailed("cancelled".into()))?;
                Ok::<_, WidgetError>(widget)
            }
            .boxed_local();
        }
        future::ready(Ok(widget)).boxed_local()
    }
}

// ============================================================================
// EditorFixture
// ============================================================================

pub struct EditorFixture {
    pub editor: Editor,
    pub host: FakeHost,
    pub surface: RecordingSurface,
    pub widgets: ScriptedWidgets,
}

impl EditorFixture {
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        let host = FakeHost::new();
        let surface = RecordingSurface::default();
        let widgets = ScriptedWidgets::default();
        let editor = ipl_editor::create_editor(
            "editor",
            Box::new(host.clone()),
            Box::new(surface.clone()),
            Box::new(widgets.clone()),
            settings,
        );
        Self {
            editor,
            host,
            surface,
            widgets,
        }
    }

    /// Add a text area and wait for its widget.
    pub fn text_area(&mut self, top: f32, left: f32, width: f32) -> AreaId {
        block_on(self.editor.add_text_area(top, left, width)).expect("text area created")
    }

    pub fn image_area(&mut self, top: f32, left: f32, width: f32, height: f32) -> AreaId {
        self.editor
            .add_image_area(top, left, width, height)
            .expect("image area created")
    }

    /// Client position of a document point under the current host geometry.
    pub fn client(&self, x: f32, y: f32) -> (f32, f32) {
        let state = self.host.0.borrow();
        (x + state.origin.x - state.scroll.x, y + state.origin.y - state.scroll.y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let (cx, cy) = self.client(x, y);
        self.editor
            .handle_event(EditorEvent::PointerMove(PointerEvent::primary(cx, cy)));
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let (cx, cy) = self.client(x, y);
        self.editor
            .handle_event(EditorEvent::PointerDown(PointerEvent::primary(cx, cy)));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        let (cx, cy) = self.client(x, y);
        self.editor
            .handle_event(EditorEvent::PointerUp(PointerEvent::primary(cx, cy)));
    }

    /// Press at `from`, move to `to`, release at `to`.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.pointer_move(from.0, from.1);
        self.pointer_down(from.0, from.1);
        self.pointer_move(to.0, to.1);
        self.pointer_up(to.0, to.1);
    }

    pub fn scroll_workspace(&mut self, top: f32) {
        self.host.set_scroll_top(top);
        self.editor.handle_event(EditorEvent::ContainerScroll);
    }

    pub fn settle(&mut self) -> Vec<AreaId> {
        block_on(self.editor.settle_pending())
    }

    pub fn rect(&self, id: AreaId) -> Rect {
        self.editor
            .layout()
            .by_id(id)
            .expect("area exists")
            .bounding_rect()
    }
}
