//! Off-screen pixmap holding the captured backdrop.
//!
//! The backdrop is uploaded once and then copied onto the window whenever it
//! needs repainting. The pixmap and its graphics context are released when the
//! [`Compositor`] is dropped, on every exit path.

use log::{debug, warn};
use x11rb::protocol::xproto::{Drawable, Gcontext, Pixmap};

use super::error::OverlayError;
use crate::capture::{self, CapturedImage};
use crate::display::{DisplayServer, ServerError};

pub struct Compositor<'a, S: DisplayServer> {
    server: &'a S,
    pixmap: Pixmap,
    gc: Gcontext,
    depth: u8,
    width: u16,
    height: u16,
}

impl<'a, S: DisplayServer> Compositor<'a, S> {
    /// Allocates a `width x height` pixmap compatible with `drawable`, plus its graphics context.
    pub fn create(
        server: &'a S,
        drawable: Drawable,
        width: u16,
        height: u16,
        depth: u8,
    ) -> Result<Self, OverlayError> {
        let pixmap = server
            .create_pixmap(depth, drawable, width, height)
            .map_err(OverlayError::resource("pixmap"))?;

        let gc = match server.create_gc(pixmap) {
            Ok(gc) => gc,
            Err(source) => {
                if let Err(err) = server.free_pixmap(pixmap) {
                    warn!("Failed to free pixmap {:#x}: {}", pixmap, err);
                }
                return Err(OverlayError::Resource {
                    what: "graphics context",
                    source,
                });
            }
        };

        debug!("Created {}x{} pixmap {:#x} (gc {:#x})", width, height, pixmap, gc);
        Ok(Self {
            server,
            pixmap,
            gc,
            depth,
            width,
            height,
        })
    }

    pub fn pixmap(&self) -> Pixmap {
        self.pixmap
    }

    /// Graphics context shared by backdrop copies and mark drawing.
    pub fn gc(&self) -> Gcontext {
        self.gc
    }

    /// Writes `image` into the pixmap one scan-line per request.
    ///
    /// Write requests are size-limited by the server, so a full frame is never
    /// sent in one piece. The first failing row aborts the upload.
    pub fn upload(&self, image: &CapturedImage) -> Result<(), OverlayError> {
        debug_assert_eq!(
            (image.width(), image.height()),
            (u32::from(self.width), u32::from(self.height))
        );

        for y in 0..self.height {
            let dst_y = i16::try_from(y).map_err(|_| OverlayError::Draw {
                what: "screenshot line",
                source: ServerError::Rejected(format!("row {y} is outside the coordinate range")),
            })?;
            let row = capture::to_native_row(image, y.into());
            self.server
                .put_image(
                    self.pixmap,
                    self.gc,
                    self.width,
                    1,
                    0,
                    dst_y,
                    self.depth,
                    &row,
                )
                .map_err(OverlayError::draw("screenshot line"))?;
        }

        debug!("Uploaded {} rows into pixmap {:#x}", self.height, self.pixmap);
        Ok(())
    }

    /// Copies the whole backdrop onto `target` at the origin.
    pub fn copy_to(&self, target: Drawable) -> Result<(), OverlayError> {
        self.server
            .copy_area(self.pixmap, target, self.gc, self.width, self.height)
            .map_err(OverlayError::draw("backdrop"))
    }

    /// Sets the color used for marks.
    pub fn set_foreground(&self, pixel: u32) -> Result<(), OverlayError> {
        self.server
            .set_foreground(self.gc, pixel)
            .map_err(OverlayError::state("mark color"))
    }
}

impl<S: DisplayServer> Drop for Compositor<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.server.free_gc(self.gc) {
            warn!("Failed to free graphics context {:#x}: {}", self.gc, err);
        }
        if let Err(err) = self.server.free_pixmap(self.pixmap) {
            warn!("Failed to free pixmap {:#x}: {}", self.pixmap, err);
        }
        debug!("Released pixmap {:#x}", self.pixmap);
    }
}
