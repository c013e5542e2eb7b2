//! Editor module - the editor instance and its behaviour.
//!
//! This module is organized into several submodules:
//! - `state` - The Editor struct definition and sub-structs
//! - `lifecycle` - Construction and settings reload
//! - `modes` - Mode transitions and event routing
//! - `text_areas` - Area creation, including async widget creation
//! - `scroll_sync` - Scroll/resize synchronization
//!
//! Pointer handlers live in [`crate::input`].

mod state;
mod lifecycle;
mod modes;
mod text_areas;
mod scroll_sync;

pub use state::{Editor, InteractionState, ModeState, SyncState};
pub use text_areas::{PendingTextArea, SettledTextArea};
