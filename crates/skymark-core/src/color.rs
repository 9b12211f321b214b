use std::str::FromStr;

use color::{ColorSpaceTag, DynamicColor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a CSS color string cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorParseError {
    input: String,
    reason: String,
}

/// A normalized RGBA color with components in `[0.0, 1.0]`.
///
/// Symbol default colors are stored as packed `0xRRGGBBAA` integers and
/// unpacked through [`Rgba::from_packed`] when painting. Caller-supplied
/// override colors can also be parsed from CSS color strings such as
/// `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Rgba {
    /// Creates a color from normalized components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a `0xRRGGBBAA` integer into normalized components.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 24) & 0xFF) as f32 / 255.0,
            g: ((packed >> 16) & 0xFF) as f32 / 255.0,
            b: ((packed >> 8) & 0xFF) as f32 / 255.0,
            a: (packed & 0xFF) as f32 / 255.0,
        }
    }

    /// Packs the color back into a `0xRRGGBBAA` integer, rounding each
    /// component to the nearest 8-bit value.
    pub fn to_packed(self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 24) | (channel(self.g) << 16) | (channel(self.b) << 8) | channel(self.a)
    }

    /// Parses a CSS color string into a normalized sRGB color.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let color = DynamicColor::from_str(input).map_err(|err| ColorParseError {
            input: input.to_string(),
            reason: err.to_string(),
        })?;
        let [r, g, b, a] = color.convert(ColorSpaceTag::Srgb).components;
        Ok(Self { r, g, b, a })
    }

    /// Returns the red component.
    pub fn r(self) -> f32 {
        self.r
    }

    /// Returns the green component.
    pub fn g(self) -> f32 {
        self.g
    }

    /// Returns the blue component.
    pub fn b(self) -> f32 {
        self.b
    }

    /// Returns the alpha component.
    pub fn a(self) -> f32 {
        self.a
    }

    /// Returns the components as an `[r, g, b, a]` array.
    pub fn components(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    /// Opaque white.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}
