//! RGB color type for marks and its command-line parsing.

use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color.
///
/// # Examples
///
/// ```
/// use xscriber::draw::Color;
/// let crimson: Color = "0xDC143C".parse().unwrap();
/// assert_eq!(crimson, Color::CRIMSON);
/// assert_eq!(crimson.to_pixel(), 0xDC143C);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::from_rgb_hex(0xFF0000);
    pub const GREEN: Color = Color::from_rgb_hex(0x00FF00);
    pub const BLUE: Color = Color::from_rgb_hex(0x0000FF);
    pub const YELLOW: Color = Color::from_rgb_hex(0xFFFF00);
    pub const ORANGE: Color = Color::from_rgb_hex(0xFF8000);
    pub const PINK: Color = Color::from_rgb_hex(0xFF00FF);
    pub const WHITE: Color = Color::from_rgb_hex(0xFFFFFF);
    pub const BLACK: Color = Color::from_rgb_hex(0x000000);
    /// Default mark color.
    pub const CRIMSON: Color = Color::from_rgb_hex(0xDC143C);

    /// Builds a color from `0xRRGGBB`; bits above 24 are ignored.
    pub const fn from_rgb_hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    pub const fn to_rgb_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Pixel value for a 24-bit TrueColor visual (red mask `0xFF0000`).
    pub const fn to_pixel(self) -> u32 {
        self.to_rgb_hex()
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "orange" => Self::ORANGE,
            "pink" => Self::PINK,
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "crimson" => Self::CRIMSON,
            _ => return None,
        };
        Some(color)
    }
}

/// Parses a color argument into a raw unsigned value without range checks.
///
/// Accepts `0xRRGGBB`, `#RRGGBB`, a decimal value, or a color name. Values
/// wider than 24 bits are returned unchanged.
pub fn parse_color_value(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'));

    match hex {
        Some(digits) => {
            u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex color '{s}': {e}"))
        }
        None => match Color::from_name(s) {
            Some(color) => Ok(color.to_rgb_hex()),
            None => s.parse::<u32>().map_err(|_| format!("unknown color '{s}'")),
        },
    }
}

impl FromStr for Color {
    type Err = String;

    /// Like [`parse_color_value`], but rejects values wider than 24 bits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_color_value(s)?;
        if value > 0xFF_FFFF {
            return Err(format!("color '{}' does not fit in 24-bit RGB", s.trim()));
        }
        Ok(Self::from_rgb_hex(value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_rgb_hex())
    }
}
