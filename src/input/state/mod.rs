use log::debug;

use crate::config::{Action, KeybindingsConfig};
use crate::draw::Mark;
use crate::input::events::{InputEvent, MouseButton};


/// Whether the primary button is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not drawing - waiting for a primary button press
    Idle,
    /// Primary button held - every pointer motion leaves a mark
    Dragging,
}

/// What the event loop should do in response to a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Copy the backdrop onto the window, erasing all marks
    Redraw,
    /// Draw a mark directly onto the window
    Draw(Mark),
    /// Leave the event loop
    Quit,
    /// Nothing to do
    Ignore,
}

/// Drag state machine driving the overlay.
///
/// Owned by the event loop; nothing else observes it.
pub struct InputState {
    /// Current drag state
    pub state: DrawingState,
    /// Side length of each mark in pixels
    pub stroke_width: u16,
    keybindings: KeybindingsConfig,
}

impl InputState {
    pub fn new(stroke_width: u16, keybindings: KeybindingsConfig) -> Self {
        Self {
            state: DrawingState::Idle,
            stroke_width,
            keybindings,
        }
    }

    /// Consumes one event and returns the action it requires.
    pub fn handle_event(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::Expose => Response::Redraw,
            InputEvent::KeyPress { keycode } => match self.keybindings.action_for(keycode) {
                Some(Action::Quit) => Response::Quit,
                Some(Action::Clear) => Response::Redraw,
                None => {
                    debug!("Unbound keycode {}", keycode);
                    Response::Ignore
                }
            },
            InputEvent::ButtonPress {
                button: MouseButton::Left,
                ..
            } => {
                self.state = DrawingState::Dragging;
                Response::Ignore
            }
            InputEvent::ButtonRelease {
                button: MouseButton::Left,
                ..
            } => {
                self.state = DrawingState::Idle;
                Response::Ignore
            }
            InputEvent::Motion { x, y } => match self.state {
                DrawingState::Dragging => Response::Draw(Mark::new(x, y, self.stroke_width)),
                DrawingState::Idle => Response::Ignore,
            },
            InputEvent::ButtonPress { .. }
            | InputEvent::ButtonRelease { .. }
            | InputEvent::Other => Response::Ignore,
        }
    }
}
