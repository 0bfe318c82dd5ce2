//! Recording display server for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use x11rb::protocol::xproto::{
    Atom, Cursor, Drawable, EventMask, Font, Gcontext, Pixmap, Rectangle, Window,
};

use super::{DisplayServer, ScreenInfo, ServerError};
use crate::input::InputEvent;

pub(crate) const ROOT: Window = 0x100;

/// Operations that can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Op {
    GetImage,
    CreateWindow,
    MapWindow,
    CreatePixmap,
    CreateGc,
    SetForeground,
    PutImage,
    CopyArea,
    PolyRectangle,
    InternAtom,
    SetAtomProperty,
    OpenFont,
    CreateGlyphCursor,
    SetWindowCursor,
}

/// A request as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetImage {
        drawable: Drawable,
        width: u16,
        height: u16,
    },
    CreateWindow {
        window: Window,
        width: u16,
        height: u16,
        background: u32,
        event_mask: EventMask,
    },
    MapWindow(Window),
    CreatePixmap {
        pixmap: Pixmap,
        depth: u8,
        drawable: Drawable,
        width: u16,
        height: u16,
    },
    FreePixmap(Pixmap),
    CreateGc {
        gc: Gcontext,
        drawable: Drawable,
    },
    SetForeground {
        gc: Gcontext,
        pixel: u32,
    },
    FreeGc(Gcontext),
    PutImage {
        drawable: Drawable,
        width: u16,
        height: u16,
        dst_x: i16,
        dst_y: i16,
        depth: u8,
        data: Vec<u8>,
    },
    CopyArea {
        src: Drawable,
        dst: Drawable,
        width: u16,
        height: u16,
    },
    PolyRectangle {
        drawable: Drawable,
        rectangles: Vec<Rectangle>,
    },
    InternAtom(String),
    SetAtomProperty {
        window: Window,
        property: Atom,
        values: Vec<Atom>,
    },
    OpenFont(String),
    CloseFont(Font),
    CreateGlyphCursor {
        font: Font,
        glyph: u16,
    },
    FreeCursor(Cursor),
    SetWindowCursor {
        window: Window,
        cursor: Cursor,
    },
}

#[derive(Default)]
struct Failures {
    always: Vec<Op>,
    nth: Vec<(Op, usize)>,
    counts: HashMap<Op, usize>,
}

pub(crate) struct MockServer {
    screen: ScreenInfo,
    backdrop: Vec<u8>,
    next_id: Mutex<u32>,
    atoms: Mutex<HashMap<String, Atom>>,
    calls: Mutex<Vec<Call>>,
    events: Mutex<VecDeque<InputEvent>>,
    failures: Mutex<Failures>,
}

impl MockServer {
    /// Server whose root window holds `backdrop`, native pixels of a `width x height` screen.
    pub(crate) fn new(width: u16, height: u16, backdrop: Vec<u8>) -> Self {
        Self {
            screen: ScreenInfo {
                root: ROOT,
                root_depth: 24,
                root_visual: 0x21,
                white_pixel: 0xFF_FFFF,
                width,
                height,
            },
            backdrop,
            next_id: Mutex::new(0x0020_0001),
            atoms: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            events: Mutex::new(VecDeque::new()),
            failures: Mutex::new(Failures::default()),
        }
    }

    /// Server with a black `width x height` screen.
    pub(crate) fn blank(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize * 4;
        Self::new(width, height, vec![0; len])
    }

    pub(crate) fn push_events(&self, events: impl IntoIterator<Item = InputEvent>) {
        self.events.lock().unwrap().extend(events);
    }

    pub(crate) fn remaining_events(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub(crate) fn fail_on(&self, op: Op) {
        self.failures.lock().unwrap().always.push(op);
    }

    /// Fails only the `n`th (zero-based) request of kind `op`.
    pub(crate) fn fail_on_nth(&self, op: Op, n: usize) {
        self.failures.lock().unwrap().nth.push((op, n));
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_matching(&self, pred: impl Fn(&Call) -> bool) -> Vec<Call> {
        self.calls().into_iter().filter(|c| pred(c)).collect()
    }

    pub(crate) fn atom(&self, name: &str) -> Option<Atom> {
        self.atoms.lock().unwrap().get(name).copied()
    }

    fn record(&self, op: Option<Op>, call: Call) -> Result<(), ServerError> {
        self.calls.lock().unwrap().push(call);
        let Some(op) = op else {
            return Ok(());
        };

        let mut failures = self.failures.lock().unwrap();
        let count = failures.counts.entry(op).or_insert(0);
        let index = *count;
        *count += 1;

        if failures.always.contains(&op) || failures.nth.contains(&(op, index)) {
            Err(ServerError::Rejected(format!("{op:?} failed")))
        } else {
            Ok(())
        }
    }

    fn alloc_id(&self) -> u32 {
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }
}

impl DisplayServer for MockServer {
    fn screen(&self) -> ScreenInfo {
        self.screen
    }

    fn get_image(
        &self,
        drawable: Drawable,
        width: u16,
        height: u16,
    ) -> Result<Vec<u8>, ServerError> {
        self.record(
            Some(Op::GetImage),
            Call::GetImage {
                drawable,
                width,
                height,
            },
        )?;
        Ok(self.backdrop.clone())
    }

    fn create_window(
        &self,
        _screen: &ScreenInfo,
        width: u16,
        height: u16,
        background: u32,
        event_mask: EventMask,
    ) -> Result<Window, ServerError> {
        let window = self.alloc_id();
        self.record(
            Some(Op::CreateWindow),
            Call::CreateWindow {
                window,
                width,
                height,
                background,
                event_mask,
            },
        )?;
        Ok(window)
    }

    fn map_window(&self, window: Window) -> Result<(), ServerError> {
        self.record(Some(Op::MapWindow), Call::MapWindow(window))
    }

    fn create_pixmap(
        &self,
        depth: u8,
        drawable: Drawable,
        width: u16,
        height: u16,
    ) -> Result<Pixmap, ServerError> {
        let pixmap = self.alloc_id();
        self.record(
            Some(Op::CreatePixmap),
            Call::CreatePixmap {
                pixmap,
                depth,
                drawable,
                width,
                height,
            },
        )?;
        Ok(pixmap)
    }

    fn free_pixmap(&self, pixmap: Pixmap) -> Result<(), ServerError> {
        self.record(None, Call::FreePixmap(pixmap))
    }

    fn create_gc(&self, drawable: Drawable) -> Result<Gcontext, ServerError> {
        let gc = self.alloc_id();
        self.record(Some(Op::CreateGc), Call::CreateGc { gc, drawable })?;
        Ok(gc)
    }

    fn set_foreground(&self, gc: Gcontext, pixel: u32) -> Result<(), ServerError> {
        self.record(Some(Op::SetForeground), Call::SetForeground { gc, pixel })
    }

    fn free_gc(&self, gc: Gcontext) -> Result<(), ServerError> {
        self.record(None, Call::FreeGc(gc))
    }

    fn put_image(
        &self,
        drawable: Drawable,
        _gc: Gcontext,
        width: u16,
        height: u16,
        dst_x: i16,
        dst_y: i16,
        depth: u8,
        data: &[u8],
    ) -> Result<(), ServerError> {
        self.record(
            Some(Op::PutImage),
            Call::PutImage {
                drawable,
                width,
                height,
                dst_x,
                dst_y,
                depth,
                data: data.to_vec(),
            },
        )
    }

    fn copy_area(
        &self,
        src: Drawable,
        dst: Drawable,
        _gc: Gcontext,
        width: u16,
        height: u16,
    ) -> Result<(), ServerError> {
        self.record(
            Some(Op::CopyArea),
            Call::CopyArea {
                src,
                dst,
                width,
                height,
            },
        )
    }

    fn poly_rectangle(
        &self,
        drawable: Drawable,
        _gc: Gcontext,
        rectangles: &[Rectangle],
    ) -> Result<(), ServerError> {
        self.record(
            Some(Op::PolyRectangle),
            Call::PolyRectangle {
                drawable,
                rectangles: rectangles.to_vec(),
            },
        )
    }

    fn intern_atom(&self, name: &str) -> Result<Atom, ServerError> {
        self.record(Some(Op::InternAtom), Call::InternAtom(name.to_string()))?;
        let mut atoms = self.atoms.lock().unwrap();
        let next = 0x1000 + atoms.len() as Atom;
        Ok(*atoms.entry(name.to_string()).or_insert(next))
    }

    fn set_atom_property(
        &self,
        window: Window,
        property: Atom,
        values: &[Atom],
    ) -> Result<(), ServerError> {
        self.record(
            Some(Op::SetAtomProperty),
            Call::SetAtomProperty {
                window,
                property,
                values: values.to_vec(),
            },
        )
    }

    fn open_font(&self, name: &str) -> Result<Font, ServerError> {
        self.record(Some(Op::OpenFont), Call::OpenFont(name.to_string()))?;
        Ok(self.alloc_id())
    }

    fn close_font(&self, font: Font) -> Result<(), ServerError> {
        self.record(None, Call::CloseFont(font))
    }

    fn create_glyph_cursor(&self, font: Font, glyph: u16) -> Result<Cursor, ServerError> {
        self.record(
            Some(Op::CreateGlyphCursor),
            Call::CreateGlyphCursor { font, glyph },
        )?;
        Ok(self.alloc_id())
    }

    fn free_cursor(&self, cursor: Cursor) -> Result<(), ServerError> {
        self.record(None, Call::FreeCursor(cursor))
    }

    fn set_window_cursor(&self, window: Window, cursor: Cursor) -> Result<(), ServerError> {
        self.record(
            Some(Op::SetWindowCursor),
            Call::SetWindowCursor { window, cursor },
        )
    }

    fn wait_for_event(&self) -> Result<InputEvent, ServerError> {
        self.events
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ServerError::Rejected("event queue drained".to_string()))
    }
}
