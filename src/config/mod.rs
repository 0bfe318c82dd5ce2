//! Runtime configuration for xscriber.
//!
//! There is no configuration file: every setting comes from the command line
//! and is validated here before the overlay starts.

pub mod keybindings;

// Re-export commonly used types at module level
pub use keybindings::{Action, KeybindingsConfig};

use crate::draw::Color;

/// Default side length of a mark in pixels.
pub const DEFAULT_STROKE_WIDTH: u16 = 2;

/// Drawing defaults for marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingConfig {
    /// Side length of each drawn square, in pixels
    pub stroke_width: u16,
    /// Foreground color of drawn squares
    pub color: Color,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            color: Color::CRIMSON,
        }
    }
}

/// Main configuration structure containing all user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub drawing: DrawingConfig,
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Builds a validated configuration from command-line values.
    ///
    /// `color` is a `0xRRGGBB` value; see [`Config::validate_and_clamp`].
    pub fn new(stroke_width: u16, color: u32) -> Self {
        let (stroke_width, color) = Self::validate_and_clamp(stroke_width, color);
        Self {
            drawing: DrawingConfig {
                stroke_width,
                color: Color::from_rgb_hex(color),
            },
            keybindings: KeybindingsConfig::default(),
        }
    }

    /// Clamps values that would produce invisible marks or an invalid pixel.
    ///
    /// - `stroke_width`: at least 1
    /// - `color`: 24-bit RGB; higher bits are dropped
    fn validate_and_clamp(stroke_width: u16, color: u32) -> (u16, u32) {
        let stroke_width = if stroke_width == 0 {
            log::warn!("Invalid stroke width 0, clamping to 1");
            1
        } else {
            stroke_width
        };

        let color = if color > 0xFF_FFFF {
            log::warn!(
                "Color {:#x} exceeds 24 bits, masking to {:#08x}",
                color,
                color & 0xFF_FFFF
            );
            color & 0xFF_FFFF
        } else {
            color
        };

        (stroke_width, color)
    }
}
