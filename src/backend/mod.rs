//! Overlay pipeline: capture, upload, present, then run the event loop.

use anyhow::{Context, Result};
use log::{debug, error, info};

pub mod compositor;
pub mod error;
pub mod event_loop;
pub mod window;


pub use compositor::Compositor;
pub use error::OverlayError;
pub use window::PresentationWindow;

use crate::capture;
use crate::config::Config;
use crate::display::{DisplayServer, X11Server};

/// Connects to the X server named by `$DISPLAY` and runs the overlay until the quit key.
///
/// Only a failed connection is returned as an error. Anything that goes wrong
/// once connected is logged by [`run_logged`].
pub fn run_x11(config: &Config) -> Result<()> {
    let server = X11Server::connect(None).context("Failed to connect to X server")?;
    run_logged(&server, config);
    Ok(())
}

/// Runs the overlay and logs a setup or event failure instead of returning it.
pub fn run_logged<S: DisplayServer>(server: &S, config: &Config) {
    if let Err(err) = run(server, config) {
        error!("{:#}", anyhow::Error::new(err));
    }
}

/// Runs the whole overlay against `server`.
///
/// Nothing is shown unless every setup step succeeds. The pixmap, its graphics
/// context, and the cursor are released on every return path.
pub fn run<S: DisplayServer>(server: &S, config: &Config) -> Result<(), OverlayError> {
    let screen = server.screen();

    let image = capture::capture_screen(server, screen.root, screen.width, screen.height)?;
    let (width, height) = (screen.width, screen.height);
    debug!("Captured backdrop {}x{}", image.width(), image.height());

    let mut window = PresentationWindow::create(server, &screen, width, height)?;
    window.set_fullscreen()?;

    let compositor = Compositor::create(server, window.id(), width, height, screen.root_depth)?;
    compositor.upload(&image)?;

    window.map()?;
    compositor.set_foreground(config.drawing.color.to_pixel())?;
    window.set_cursor(window::PENCIL_GLYPH)?;

    info!(
        "Overlay ready ({}x{}, stroke {}px, color {})",
        width, height, config.drawing.stroke_width, config.drawing.color
    );
    event_loop::run(server, &compositor, &window, config)
}
