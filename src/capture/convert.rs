//! Conversion between the display's native pixel layout and RGBA.
//!
//! Native pixels are packed 32-bit values stored as `B, G, R, X` bytes with no
//! row padding. The fourth byte of a captured pixel is discarded and every
//! converted pixel is fully opaque.

use image::RgbaImage;

use super::types::{CaptureError, CapturedImage};

/// Converts a native `width x height` pixel dump into an RGBA image.
pub fn to_rgba(raw: &[u8], width: u32, height: u32) -> Result<CapturedImage, CaptureError> {
    let expected = width as usize * height as usize * 4;
    if raw.len() != expected {
        return Err(CaptureError::BufferSize {
            expected,
            actual: raw.len(),
        });
    }

    let mut rgba = Vec::with_capacity(expected);
    for px in raw.chunks_exact(4) {
        rgba.extend_from_slice(&[px[2], px[1], px[0], u8::MAX]);
    }

    let image = RgbaImage::from_raw(width, height, rgba).ok_or(CaptureError::BufferSize {
        expected,
        actual: raw.len(),
    })?;
    Ok(CapturedImage::new(image))
}

/// Native bytes for scan-line `y` of `image`, ready for a single-row upload.
pub fn to_native_row(image: &CapturedImage, y: u32) -> Vec<u8> {
    rgba_to_native(image.row(y))
}

/// Native bytes for the whole of `image`.
pub fn to_native(image: &CapturedImage) -> Vec<u8> {
    rgba_to_native(image.as_rgba().as_raw())
}

fn rgba_to_native(rgba: &[u8]) -> Vec<u8> {
    let mut native = Vec::with_capacity(rgba.len());
    for px in rgba.chunks_exact(4) {
        native.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
    }
    native
}
