//! Data types for screen capture.

use image::RgbaImage;
use thiserror::Error;

use crate::display::ServerError;

/// Normalized screenshot: dense row-major RGBA, always fully opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    image: RgbaImage,
}

impl CapturedImage {
    pub(crate) fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA channels of the pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// RGBA bytes of scan-line `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width() as usize * 4;
        let start = y as usize * stride;
        &self.image.as_raw()[start..start + stride]
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }
}

/// Errors that can occur during screen capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("getting image: {0}")]
    Request(#[source] ServerError),

    #[error("invalid capture geometry {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
