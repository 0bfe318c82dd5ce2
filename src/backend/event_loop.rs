// Blocking, single-threaded dispatch of display events into repaints and marks.
use log::{info, warn};

use super::compositor::Compositor;
use super::error::OverlayError;
use super::window::PresentationWindow;
use crate::config::Config;
use crate::display::DisplayServer;
use crate::input::{InputState, Response};

/// Processes events in arrival order until the quit key is pressed.
///
/// Failing to read an event ends the loop with an error. A failed repaint or
/// mark is logged and dropped, and the loop carries on.
pub fn run<S: DisplayServer>(
    server: &S,
    compositor: &Compositor<'_, S>,
    window: &PresentationWindow<'_, S>,
    config: &Config,
) -> Result<(), OverlayError> {
    let mut input = InputState::new(config.drawing.stroke_width, config.keybindings);

    loop {
        let event = server.wait_for_event().map_err(OverlayError::Event)?;

        match input.handle_event(event) {
            Response::Redraw => {
                if let Err(err) = compositor.copy_to(window.id()) {
                    warn!("could not copy pixmap to window: {}", err);
                }
            }
            Response::Draw(mark) => {
                if let Err(err) = window.draw_mark(compositor.gc(), mark) {
                    warn!("{}", err);
                }
            }
            Response::Quit => {
                info!("quitting");
                return Ok(());
            }
            Response::Ignore => {}
        }
    }
}
