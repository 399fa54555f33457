//! Input handling: platform-agnostic event types and the drag state the
//! controller keeps between pointer events.

/// Held buttons and last pointer position.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;

pub use drag::{ButtonSet, DragState};
pub use event::{InputEvent, MouseButton};
