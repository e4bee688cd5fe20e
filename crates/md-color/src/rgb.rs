// SPDX-License-Identifier: MIT
//
// Lenient HEX → RGB conversion for CSS output.
//
// Unlike `Color::hex`, this never fails: anything that is not a 3- or
// 6-digit hex color (absent, empty, wrong length, bad digits) comes out as
// black. Theme files in the wild carry the odd broken value, and one bad
// role should not take down the whole stylesheet.

use std::fmt;

use crate::color::parse_hex_rgb;

/// An 8-bit sRGB triple.
///
/// Displays as the comma-separated component list CSS expects inside
/// `rgb(var(--x))`: `"103, 80, 164"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback for anything that fails to parse.
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

/// Convert a hex color to its RGB components, degrading to black.
///
/// Accepts `#RGB`, `#RRGGBB`, `RGB`, `RRGGBB`. Short forms expand each digit
/// by duplication (`f53` → `ff5533`).
///
/// ```
/// use md_color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#6750A4").to_string(), "103, 80, 164");
/// assert_eq!(hex_to_rgb("f53"), hex_to_rgb("ff5533"));
/// assert_eq!(hex_to_rgb(None), Rgb::BLACK);
/// ```
#[must_use]
pub fn hex_to_rgb<'a>(hex: impl Into<Option<&'a str>>) -> Rgb {
    hex.into()
        .and_then(parse_hex_rgb)
        .map_or(Rgb::BLACK, |(r, g, b)| Rgb::new(r, g, b))
}
