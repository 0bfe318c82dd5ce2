use log::debug;
use x11rb::protocol::xproto::Drawable;

use super::convert;
use super::types::{CaptureError, CapturedImage};
use crate::display::DisplayServer;

/// Captures the full `width x height` area of `root`, starting at (0, 0).
pub fn capture_screen<S: DisplayServer>(
    server: &S,
    root: Drawable,
    width: u16,
    height: u16,
) -> Result<CapturedImage, CaptureError> {
    if width == 0 || height == 0 {
        return Err(CaptureError::InvalidGeometry {
            width: width.into(),
            height: height.into(),
        });
    }

    let raw = server
        .get_image(root, width, height)
        .map_err(CaptureError::Request)?;
    debug!("Captured {}x{} screen ({} bytes)", width, height, raw.len());

    convert::to_rgba(&raw, width.into(), height.into())
}
