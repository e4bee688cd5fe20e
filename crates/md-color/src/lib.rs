//! # md-color — perceptual color math for Material theme export
//!
//! Two things live here:
//!
//! - [`hex_to_rgb`]: lenient `#RRGGBB` → [`Rgb`] conversion that never fails.
//! - [`TonalPalette`]: eleven shades (50..950) derived from one base color
//!   by interpolating in OKLCH.
//!
//! # Color Space
//!
//! [`Color`] stores OKLCH (perceptually uniform). Hex parsing, blending and
//! gamut mapping all go through it; only the final shade is rendered back
//! to an sRGB hex string.

// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod rgb;
pub mod tonal;

pub use color::Color;
pub use rgb::{Rgb, hex_to_rgb};
pub use tonal::{PaletteError, SHADES, TonalPalette};
