//! Screen capture for xscriber.
//!
//! Grabs the root window into a [`CapturedImage`] and converts between the
//! display's native pixel layout and RGBA.

pub mod convert;
pub mod screen;
pub mod types;


pub use convert::{to_native, to_native_row, to_rgba};
pub use screen::capture_screen;
pub use types::{CaptureError, CapturedImage};
