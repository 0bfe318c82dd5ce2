//! Fullscreen window presenting the backdrop and receiving marks.

use log::{debug, warn};
use x11rb::protocol::xproto::{Cursor, EventMask, Gcontext, Rectangle, Window};

use super::error::OverlayError;
use crate::display::{DisplayServer, ScreenInfo};
use crate::draw::Mark;

/// Pencil glyph in the standard X cursor font; its mask is the next glyph.
pub const PENCIL_GLYPH: u16 = 86;

const CURSOR_FONT: &str = "cursor";

/// Events the window subscribes to. The window is never resized, so no
/// structure events are requested.
pub fn event_mask() -> EventMask {
    EventMask::EXPOSURE
        | EventMask::BUTTON_PRESS
        | EventMask::BUTTON_RELEASE
        | EventMask::POINTER_MOTION
        | EventMask::KEY_PRESS
}

pub struct PresentationWindow<'a, S: DisplayServer> {
    server: &'a S,
    window: Window,
    cursor: Option<Cursor>,
}

impl<'a, S: DisplayServer> PresentationWindow<'a, S> {
    /// Creates an unmapped `width x height` top-level window on `screen` with a white background.
    pub fn create(
        server: &'a S,
        screen: &ScreenInfo,
        width: u16,
        height: u16,
    ) -> Result<Self, OverlayError> {
        let window = server
            .create_window(screen, width, height, screen.white_pixel, event_mask())
            .map_err(OverlayError::resource("window"))?;
        debug!("Created {}x{} window {:#x}", width, height, window);

        Ok(Self {
            server,
            window,
            cursor: None,
        })
    }

    pub fn id(&self) -> Window {
        self.window
    }

    /// Asks the window manager to show the window fullscreen via `_NET_WM_STATE`.
    pub fn set_fullscreen(&self) -> Result<(), OverlayError> {
        let fullscreen = self
            .server
            .intern_atom("_NET_WM_STATE_FULLSCREEN")
            .map_err(OverlayError::state("fullscreen hint"))?;
        let wm_state = self
            .server
            .intern_atom("_NET_WM_STATE")
            .map_err(OverlayError::state("fullscreen hint"))?;

        self.server
            .set_atom_property(self.window, wm_state, &[fullscreen])
            .map_err(OverlayError::state("fullscreen hint"))
    }

    /// Replaces the pointer cursor with `glyph` from the standard cursor font.
    pub fn set_cursor(&mut self, glyph: u16) -> Result<(), OverlayError> {
        let font = self
            .server
            .open_font(CURSOR_FONT)
            .map_err(OverlayError::resource("cursor font"))?;

        let cursor = self.server.create_glyph_cursor(font, glyph);
        if let Err(err) = self.server.close_font(font) {
            warn!("Failed to close cursor font: {}", err);
        }
        let cursor = cursor.map_err(OverlayError::resource("cursor"))?;

        if let Some(previous) = self.cursor.replace(cursor) {
            self.free_cursor(previous);
        }

        self.server
            .set_window_cursor(self.window, cursor)
            .map_err(OverlayError::state("window cursor"))
    }

    pub fn map(&self) -> Result<(), OverlayError> {
        self.server
            .map_window(self.window)
            .map_err(OverlayError::state("window visible"))
    }

    /// Draws `mark` straight onto the window. Marks are not kept anywhere else.
    pub fn draw_mark(&self, gc: Gcontext, mark: Mark) -> Result<(), OverlayError> {
        let rect = Rectangle {
            x: mark.x,
            y: mark.y,
            width: mark.side,
            height: mark.side,
        };
        self.server
            .poly_rectangle(self.window, gc, &[rect])
            .map_err(OverlayError::draw("mark"))
    }

    fn free_cursor(&self, cursor: Cursor) {
        if let Err(err) = self.server.free_cursor(cursor) {
            warn!("Failed to free cursor {:#x}: {}", cursor, err);
        }
    }
}

impl<S: DisplayServer> Drop for PresentationWindow<'_, S> {
    fn drop(&mut self) {
        if let Some(cursor) = self.cursor.take() {
            self.free_cursor(cursor);
        }
    }
}
