// X11 implementation of the display capability surface, backed by x11rb's pure-Rust connection.
use log::{debug, warn};
use x11rb::connection::Connection;
use x11rb::protocol::Event;
use x11rb::protocol::xproto::{
    Atom, AtomEnum, ChangeGCAux, ChangeWindowAttributesAux, ConnectionExt as _, CreateGCAux,
    CreateWindowAux, Cursor, Drawable, EventMask, Font, Gcontext, ImageFormat, Pixmap, PropMode,
    Rectangle, Window, WindowClass,
};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use super::{DisplayServer, ScreenInfo, ServerError};
use crate::input::{InputEvent, MouseButton};

/// Connection to an X server plus the default screen it was opened on.
pub struct X11Server {
    conn: RustConnection,
    screen: ScreenInfo,
}

impl X11Server {
    /// Connects to `display`, or to `$DISPLAY` when `None`.
    pub fn connect(display: Option<&str>) -> Result<Self, ServerError> {
        let (conn, screen_num) = x11rb::connect(display)?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| ServerError::Rejected(format!("screen {screen_num} not found")))?;

        let screen = ScreenInfo {
            root: root.root,
            root_depth: root.root_depth,
            root_visual: root.root_visual,
            white_pixel: root.white_pixel,
            width: root.width_in_pixels,
            height: root.height_in_pixels,
        };
        debug!(
            "Connected to X server (screen {}, {}x{}, depth {})",
            screen_num, screen.width, screen.height, screen.root_depth
        );

        Ok(Self { conn, screen })
    }
}

impl DisplayServer for X11Server {
    fn screen(&self) -> ScreenInfo {
        self.screen
    }

    fn get_image(
        &self,
        drawable: Drawable,
        width: u16,
        height: u16,
    ) -> Result<Vec<u8>, ServerError> {
        let reply = self
            .conn
            .get_image(ImageFormat::Z_PIXMAP, drawable, 0, 0, width, height, u32::MAX)?
            .reply()?;
        Ok(reply.data)
    }

    fn create_window(
        &self,
        screen: &ScreenInfo,
        width: u16,
        height: u16,
        background: u32,
        event_mask: EventMask,
    ) -> Result<Window, ServerError> {
        let window = self.conn.generate_id()?;
        let aux = CreateWindowAux::new()
            .background_pixel(background)
            .event_mask(event_mask);
        self.conn
            .create_window(
                screen.root_depth,
                window,
                screen.root,
                0,
                0,
                width,
                height,
                0,
                WindowClass::INPUT_OUTPUT,
                screen.root_visual,
                &aux,
            )?
            .check()?;
        Ok(window)
    }

    fn map_window(&self, window: Window) -> Result<(), ServerError> {
        self.conn.map_window(window)?.check()?;
        Ok(())
    }

    fn create_pixmap(
        &self,
        depth: u8,
        drawable: Drawable,
        width: u16,
        height: u16,
    ) -> Result<Pixmap, ServerError> {
        let pixmap = self.conn.generate_id()?;
        self.conn
            .create_pixmap(depth, pixmap, drawable, width, height)?
            .check()?;
        Ok(pixmap)
    }

    fn free_pixmap(&self, pixmap: Pixmap) -> Result<(), ServerError> {
        self.conn.free_pixmap(pixmap)?.check()?;
        Ok(())
    }

    fn create_gc(&self, drawable: Drawable) -> Result<Gcontext, ServerError> {
        let gc = self.conn.generate_id()?;
        self.conn
            .create_gc(gc, drawable, &CreateGCAux::new())?
            .check()?;
        Ok(gc)
    }

    fn set_foreground(&self, gc: Gcontext, pixel: u32) -> Result<(), ServerError> {
        self.conn
            .change_gc(gc, &ChangeGCAux::new().foreground(pixel))?
            .check()?;
        Ok(())
    }

    fn free_gc(&self, gc: Gcontext) -> Result<(), ServerError> {
        self.conn.free_gc(gc)?.check()?;
        Ok(())
    }

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
    ) -> Result<(), ServerError> {
        self.conn
            .put_image(
                ImageFormat::Z_PIXMAP,
                drawable,
                gc,
                width,
                height,
                dst_x,
                dst_y,
                0,
                depth,
                data,
            )?
            .check()?;
        Ok(())
    }

    fn copy_area(
        &self,
        src: Drawable,
        dst: Drawable,
        gc: Gcontext,
        width: u16,
        height: u16,
    ) -> Result<(), ServerError> {
        self.conn
            .copy_area(src, dst, gc, 0, 0, 0, 0, width, height)?
            .check()?;
        Ok(())
    }

    fn poly_rectangle(
        &self,
        drawable: Drawable,
        gc: Gcontext,
        rectangles: &[Rectangle],
    ) -> Result<(), ServerError> {
        self.conn
            .poly_rectangle(drawable, gc, rectangles)?
            .check()?;
        Ok(())
    }

    fn intern_atom(&self, name: &str) -> Result<Atom, ServerError> {
        let reply = self.conn.intern_atom(false, name.as_bytes())?.reply()?;
        Ok(reply.atom)
    }

    fn set_atom_property(
        &self,
        window: Window,
        property: Atom,
        values: &[Atom],
    ) -> Result<(), ServerError> {
        self.conn
            .change_property32(PropMode::REPLACE, window, property, AtomEnum::ATOM, values)?
            .check()?;
        Ok(())
    }

    fn open_font(&self, name: &str) -> Result<Font, ServerError> {
        let font = self.conn.generate_id()?;
        self.conn.open_font(font, name.as_bytes())?.check()?;
        Ok(font)
    }

    fn close_font(&self, font: Font) -> Result<(), ServerError> {
        self.conn.close_font(font)?.check()?;
        Ok(())
    }

    fn create_glyph_cursor(&self, font: Font, glyph: u16) -> Result<Cursor, ServerError> {
        let cursor = self.conn.generate_id()?;
        self.conn
            .create_glyph_cursor(
                cursor,
                font,
                font,
                glyph,
                mask_glyph(glyph),
                0,
                0,
                0,
                0xffff,
                0xffff,
                0xffff,
            )?
            .check()?;
        Ok(cursor)
    }

    fn free_cursor(&self, cursor: Cursor) -> Result<(), ServerError> {
        self.conn.free_cursor(cursor)?.check()?;
        Ok(())
    }

    fn set_window_cursor(&self, window: Window, cursor: Cursor) -> Result<(), ServerError> {
        self.conn
            .change_window_attributes(window, &ChangeWindowAttributesAux::new().cursor(cursor))?
            .check()?;
        Ok(())
    }

    fn wait_for_event(&self) -> Result<InputEvent, ServerError> {
        let event = self.conn.wait_for_event()?;
        Ok(translate_event(event))
    }
}

/// The cursor font stores each shape's mask in the glyph right after it.
fn mask_glyph(glyph: u16) -> u16 {
    glyph.saturating_add(1)
}

/// Maps a raw X11 event onto the closed set of events the overlay reacts to.
fn translate_event(event: Event) -> InputEvent {
    match event {
        Event::Expose(_) => InputEvent::Expose,
        Event::ButtonPress(ev) => InputEvent::ButtonPress {
            button: MouseButton::from_detail(ev.detail),
            x: ev.event_x,
            y: ev.event_y,
        },
        Event::ButtonRelease(ev) => InputEvent::ButtonRelease {
            button: MouseButton::from_detail(ev.detail),
            x: ev.event_x,
            y: ev.event_y,
        },
        Event::KeyPress(ev) => InputEvent::KeyPress { keycode: ev.detail },
        Event::MotionNotify(ev) => InputEvent::Motion {
            x: ev.event_x,
            y: ev.event_y,
        },
        Event::Error(err) => {
            warn!("X11 error event: {:?}", err);
            InputEvent::Other
        }
        _ => InputEvent::Other,
    }
}
