//! Input and display events delivered to the overlay.

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Middle mouse button (currently unused)
    Middle,
    /// Right mouse button (currently unused)
    Right,
    /// Scroll wheel and extra buttons, by X11 button number
    Other(u8),
}

impl MouseButton {
    /// Maps an X11 core button number onto a [`MouseButton`].
    pub fn from_detail(detail: u8) -> Self {
        match detail {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }
}

/// Events the overlay reacts to.
///
/// This is a closed set: anything the display server delivers that the
/// overlay does not handle arrives as [`InputEvent::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Part of the window needs repainting
    Expose,
    ButtonPress { button: MouseButton, x: i16, y: i16 },
    ButtonRelease { button: MouseButton, x: i16, y: i16 },
    /// Key press, identified by hardware keycode
    KeyPress { keycode: u8 },
    /// Pointer moved, in window coordinates
    Motion { x: i16, y: i16 },
    Other,
}
