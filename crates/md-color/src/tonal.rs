// SPDX-License-Identifier: MIT
//
// Tonal palettes — eleven shades (50..950) derived from one base color.
//
// The base is shade 100. Shade 50 is the midpoint between white and the
// base; shades 200..950 walk from the base toward a near-black endpoint.
// All blending is OKLCH, so successive shades step evenly in perceived
// lightness instead of bunching up the way sRGB blends do.
//
//   white ──●── base ─┬──●──●──●──●──●──●──●──●──●─┬── #111111
//          50    100  │ 200                    950 │
//                   t=0.10                      t=0.75

use thiserror::Error;

use crate::color::Color;

/// Shade numbers, lightest to darkest.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Dark endpoint of the base → dark ramp.
const NEAR_BLACK: (u8, u8, u8) = (0x11, 0x11, 0x11);

/// Samples taken along the white → base ramp; the middle one is shade 50.
const LIGHT_SAMPLES: u8 = 3;

/// Samples taken along the base → near-black ramp. The first is dropped,
/// leaving nine for shades 200..950.
const DARK_SAMPLES: u8 = 10;

/// The ramp toward near-black stops short of both ends.
const DARK_PADDING: Padding = Padding { start: 0.1, end: 0.25 };

/// Palette generation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("invalid base color {0:?}: expected #RGB or #RRGGBB")]
    InvalidBase(String),
}

/// Fraction of a ramp excluded at each end.
#[derive(Clone, Copy, Debug)]
struct Padding {
    start: f32,
    end: f32,
}

impl Padding {
    const NONE: Self = Self { start: 0.0, end: 0.0 };

    /// Map `t` in 0..=1 onto the padded sub-range.
    fn apply(self, t: f32) -> f32 {
        t.mul_add(1.0 - self.start - self.end, self.start)
    }
}

/// Sample `n` evenly spaced colors from `from` to `to` in OKLCH.
fn ramp(from: Color, to: Color, n: u8, padding: Padding) -> impl Iterator<Item = Color> {
    let last = f32::from(n.saturating_sub(1).max(1));
    (0..n).map(move |i| from.mix(&to, padding.apply(f32::from(i) / last)).to_gamut())
}

/// Eleven shades of one base color, keyed by [`SHADES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TonalPalette {
    hexes: [String; 11],
}

impl TonalPalette {
    /// Generate the palette for `base`.
    ///
    /// Shade 100 is `base` itself, byte for byte. Every other shade is a
    /// lowercase `#rrggbb` string.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidBase`] if `base` is not a `#RGB` / `#RRGGBB`
    /// color.
    pub fn generate(base: &str) -> Result<Self, PaletteError> {
        let color = Color::hex(base).ok_or_else(|| PaletteError::InvalidBase(base.to_owned()))?;
        let (r, g, b) = NEAR_BLACK;
        let near_black = Color::rgb8(r, g, b);

        let lightest = ramp(Color::WHITE, color, LIGHT_SAMPLES, Padding::NONE)
            .nth(1)
            .unwrap_or(color);

        let mut hexes: [String; 11] = Default::default();
        hexes[0] = lightest.to_hex();
        hexes[1] = base.to_owned();
        for (slot, shade) in hexes[2..]
            .iter_mut()
            .zip(ramp(color, near_black, DARK_SAMPLES, DARK_PADDING).skip(1))
        {
            *slot = shade.to_hex();
        }

        Ok(Self { hexes })
    }

    /// The hex color for `shade`, or `None` if it is not one of [`SHADES`].
    #[must_use]
    pub fn get(&self, shade: u16) -> Option<&str> {
        SHADES
            .iter()
            .position(|&s| s == shade)
            .map(|i| self.hexes[i].as_str())
    }

    /// The base color (shade 100).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.hexes[1]
    }

    /// Iterate `(shade, hex)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        SHADES.iter().copied().zip(self.hexes.iter().map(String::as_str))
    }
}
