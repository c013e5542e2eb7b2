//! Editor modes and their event bindings.
//!
//! Every mode owns a fixed set of `(EventKind, Handler)` bindings, built once
//! when the editor is constructed. Leaving a mode detaches exactly its
//! bindings, entering one attaches exactly the new mode's, so two modes never
//! listen at the same time.
//!
//! ```text
//! select      pointer down/move/up   -> area handlers
//! textEdit    container + window scroll
//! createText  pointer down/move      -> rubber band, up -> new text area
//! createImage pointer down/move      -> rubber band, up -> new image area
//! freeDraw    (nothing)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Hover, move and resize existing areas
    #[default]
    Select,
    /// Edit text; pointer no longer changes the layout
    TextEdit,
    CreateText,
    CreateImage,
    /// Reserved for drawing; borders hidden, nothing bound
    FreeDraw,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Select,
        Mode::TextEdit,
        Mode::CreateText,
        Mode::CreateImage,
        Mode::FreeDraw,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Mode::Select => "select",
            Mode::TextEdit => "textEdit",
            Mode::CreateText => "createText",
            Mode::CreateImage => "createImage",
            Mode::FreeDraw => "freeDraw",
        }
    }

    fn slot(&self) -> usize {
        match self {
            Mode::Select => 0,
            Mode::TextEdit => 1,
            Mode::CreateText => 2,
            Mode::CreateImage => 3,
            Mode::FreeDraw => 4,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mode: {0}")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

/// Event sources the editor can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    /// The workspace scrolled its content
    ContainerScroll,
    /// The page hosting the editor scrolled
    WindowScroll,
    WindowResize,
}

/// Handler identities. Attaching and detaching compare these, never closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    AreaPointerMove,
    AreaPointerDown,
    AreaPointerUp,
    NewAreaPointerDown,
    NewAreaPointerMove,
    NewTextPointerUp,
    NewImagePointerUp,
    ContainerScroll,
    WindowScroll,
    WindowResize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub kind: EventKind,
    pub handler: Handler,
}

impl Binding {
    pub const fn new(kind: EventKind, handler: Handler) -> Self {
        Self { kind, handler }
    }
}

/// The binding table of every mode.
#[derive(Debug, Clone)]
pub struct ModeBindings {
    table: [Vec<Binding>; 5],
}

impl ModeBindings {
    pub fn new() -> Self {
        use EventKind::*;
        let mut table: [Vec<Binding>; 5] = Default::default();
        table[Mode::Select.slot()] = vec![
            Binding::new(PointerMove, Handler::AreaPointerMove),
            Binding::new(PointerDown, Handler::AreaPointerDown),
            Binding::new(PointerUp, Handler::AreaPointerUp),
        ];
        table[Mode::TextEdit.slot()] = vec![
            Binding::new(ContainerScroll, Handler::ContainerScroll),
            Binding::new(WindowScroll, Handler::WindowScroll),
        ];
        table[Mode::CreateText.slot()] = vec![
            Binding::new(PointerDown, Handler::NewAreaPointerDown),
            Binding::new(PointerMove, Handler::NewAreaPointerMove),
            Binding::new(PointerUp, Handler::NewTextPointerUp),
        ];
        table[Mode::CreateImage.slot()] = vec![
            Binding::new(PointerDown, Handler::NewAreaPointerDown),
            Binding::new(PointerMove, Handler::NewAreaPointerMove),
            Binding::new(PointerUp, Handler::NewImagePointerUp),
        ];
        Self { table }
    }

    pub fn for_mode(&self, mode: Mode) -> &[Binding] {
        &self.table[mode.slot()]
    }
}

impl Default for ModeBindings {
    fn default() -> Self {
        Self::new()
    }
}

/// Currently attached bindings.
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<Binding>,
    attach_count: usize,
    detach_count: usize,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, binding: Binding) {
        if !self.active.contains(&binding) {
            self.active.push(binding);
        }
        self.attach_count += 1;
    }

    pub fn detach(&mut self, binding: Binding) {
        self.active.retain(|b| *b != binding);
        self.detach_count += 1;
    }

    pub fn attach_all(&mut self, bindings: &[Binding]) {
        for binding in bindings {
            self.attach(*binding);
        }
    }

    pub fn detach_all(&mut self, bindings: &[Binding]) {
        for binding in bindings {
            self.detach(*binding);
        }
    }

    /// Handlers attached to `kind`, in attach order.
    pub fn handlers_for(&self, kind: EventKind) -> Vec<Handler> {
        self.active
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.handler)
            .collect()
    }

    pub fn is_attached(&self, handler: Handler) -> bool {
        self.active.iter().any(|b| b.handler == handler)
    }

    pub fn active(&self) -> &[Binding] {
        &self.active
    }

    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    pub fn detach_count(&self) -> usize {
        self.detach_count
    }
}
