//! Keybinding configuration.
//!
//! Keys are matched by hardware keycode, so bindings follow the physical key
//! position rather than the active keyboard layout.

/// Actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Leave the overlay
    Quit,
    /// Restore the pristine backdrop, erasing all marks
    Clear,
}

/// Keycode of `q` on a standard PC keyboard.
pub const DEFAULT_QUIT_KEYCODE: u8 = 24;

/// Keycode of `c` on a standard PC keyboard.
pub const DEFAULT_CLEAR_KEYCODE: u8 = 54;

/// Keycodes bound to overlay actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeybindingsConfig {
    pub quit: u8,
    pub clear: u8,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            quit: DEFAULT_QUIT_KEYCODE,
            clear: DEFAULT_CLEAR_KEYCODE,
        }
    }
}

impl KeybindingsConfig {
    /// Returns the action bound to `keycode`, if any. Quit wins if both share a key.
    pub fn action_for(&self, keycode: u8) -> Option<Action> {
        if keycode == self.quit {
            Some(Action::Quit)
        } else if keycode == self.clear {
            Some(Action::Clear)
        } else {
            None
        }
    }
}
