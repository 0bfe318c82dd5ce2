//! Drawing primitives for the overlay.
//!
//! - [`Color`]: RGB color of marks, parsed from the command line
//! - [`Mark`]: a square drawn at the pointer during a drag

pub mod color;
pub mod mark;

// Re-export commonly used types at module level
pub use color::{Color, parse_color_value};
pub use mark::Mark;
