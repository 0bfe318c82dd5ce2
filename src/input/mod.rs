//! Input handling and the drag state machine.
//!
//! This module translates display events into overlay responses: repainting the
//! backdrop, drawing a mark, or quitting.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{InputEvent, MouseButton};
pub use state::{DrawingState, InputState, Response};
