//! Pointer input handling for the workspace.
//!
//! ## Architecture
//!
//! Pointer handlers are plain methods on [`crate::app::Editor`]. Which of
//! them run is decided by the bindings of the current mode
//! ([`crate::modes`]); within a mode, `InputState` tracks the gesture.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `events` - Events forwarded by the host
//! - `coords` - Client to document coordinate conversion
//! - `mouse_down` - Pointer down (gesture start)
//! - `drag` - Pointer move (hover, move, resize, rubber band)
//! - `mouse_up` - Pointer up (gesture end, area creation)

pub mod coords;
mod events;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;

pub use events::{EditorEvent, PointerButton, PointerEvent};
pub use state::InputState;
