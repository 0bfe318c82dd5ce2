//! Display server capability surface.
//!
//! The overlay core never talks to the X11 protocol directly. It calls into a
//! [`DisplayServer`], which owns the connection, allocates resource ids, and
//! turns checked requests into `Result`s. [`X11Server`] is the production
//! implementation on top of `x11rb`; tests drive the core with a recording mock.

#[cfg(test)]
pub(crate) mod mock;
mod x11;

pub use x11::X11Server;

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};
use x11rb::protocol::xproto::{
    Atom, Cursor, Drawable, EventMask, Font, Gcontext, Pixmap, Rectangle, Visualid, Window,
};

use crate::input::InputEvent;

/// Errors reported by the display server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("could not connect to X server: {0}")]
    Connect(#[from] ConnectError),

    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("request failed: {0}")]
    Reply(#[from] ReplyError),

    #[error("request failed: {0}")]
    ReplyOrId(#[from] ReplyOrIdError),

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Geometry and visual of the default screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub root: Window,
    pub root_depth: u8,
    pub root_visual: Visualid,
    pub white_pixel: u32,
    pub width: u16,
    pub height: u16,
}

/// Requests the overlay issues against the display server.
///
/// Every request is checked: a method returns only after the server has either
/// accepted it or reported an error.
pub trait DisplayServer {
    /// Default screen the connection was opened on.
    fn screen(&self) -> ScreenInfo;

    /// Z-pixmap dump of `width x height` pixels of `drawable` starting at (0, 0).
    fn get_image(&self, drawable: Drawable, width: u16, height: u16)
    -> Result<Vec<u8>, ServerError>;

    /// Creates an unmapped top-level window covering `width x height` at (0, 0).
    fn create_window(
        &self,
        screen: &ScreenInfo,
        width: u16,
        height: u16,
        background: u32,
        event_mask: EventMask,
    ) -> Result<Window, ServerError>;

    fn map_window(&self, window: Window) -> Result<(), ServerError>;

    fn create_pixmap(
        &self,
        depth: u8,
        drawable: Drawable,
        width: u16,
        height: u16,
    ) -> Result<Pixmap, ServerError>;

    fn free_pixmap(&self, pixmap: Pixmap) -> Result<(), ServerError>;

    fn create_gc(&self, drawable: Drawable) -> Result<Gcontext, ServerError>;

    fn set_foreground(&self, gc: Gcontext, pixel: u32) -> Result<(), ServerError>;

    fn free_gc(&self, gc: Gcontext) -> Result<(), ServerError>;

    /// Writes Z-pixmap `data` into `drawable` at (`dst_x`, `dst_y`).
    #[allow(clippy::too_many_arguments)]
    fn put_image(
        &self,
        drawable: Drawable,
        gc: Gcontext,
        width: u16,
        height: u16,
        dst_x: i16,
        dst_y: i16,
        depth: u8,
        data: &[u8],
    ) -> Result<(), ServerError>;

    /// Copies a `width x height` area from `src` to `dst`, both anchored at (0, 0).
    fn copy_area(
        &self,
        src: Drawable,
        dst: Drawable,
        gc: Gcontext,
        width: u16,
        height: u16,
    ) -> Result<(), ServerError>;

    fn poly_rectangle(
        &self,
        drawable: Drawable,
        gc: Gcontext,
        rectangles: &[Rectangle],
    ) -> Result<(), ServerError>;

    fn intern_atom(&self, name: &str) -> Result<Atom, ServerError>;

    /// Replaces `property` on `window` with a list of atoms.
    fn set_atom_property(
        &self,
        window: Window,
        property: Atom,
        values: &[Atom],
    ) -> Result<(), ServerError>;

    fn open_font(&self, name: &str) -> Result<Font, ServerError>;

    fn close_font(&self, font: Font) -> Result<(), ServerError>;

    /// Creates a black-on-white cursor from `glyph` (and mask `glyph + 1`) of `font`.
    fn create_glyph_cursor(&self, font: Font, glyph: u16) -> Result<Cursor, ServerError>;

    fn free_cursor(&self, cursor: Cursor) -> Result<(), ServerError>;

    fn set_window_cursor(&self, window: Window, cursor: Cursor) -> Result<(), ServerError>;

    /// Blocks until the next event arrives.
    fn wait_for_event(&self) -> Result<InputEvent, ServerError>;
}
