//! A single square mark left by the pointer during a drag.

/// Axis-aligned square anchored at its top-left corner.
///
/// Marks are drawn straight onto the window and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub x: i16,
    pub y: i16,
    /// Side length in pixels
    pub side: u16,
}

impl Mark {
    pub fn new(x: i16, y: i16, side: u16) -> Self {
        Self { x, y, side }
    }
}
