// SPDX-License-Identifier: MIT
//
// md-color color engine — OKLCH-native perceptual color.
//
// Single-character variable names (r, g, b, l, c, h, s, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Tonal palettes are derived by interpolating between colors. Doing that in
// raw sRGB produces uneven lightness steps, so every blend here happens in
// OKLCH and only the final result is brought back to sRGB.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ #rrggbb
//
// Gamut mapping reduces chroma when OKLCH values fall outside sRGB.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque color stored in OKLCH space.
///
/// OKLCH is the cylindrical form of Björn Ottosson's Oklab. Lightness,
/// chroma and hue are perceptually uniform, so equal numeric steps give
/// equal visual steps. That property is what makes the tonal palette
/// shades look evenly spaced.
///
/// # Examples
///
/// ```
/// use md_color::Color;
///
/// let purple = Color::hex("#6750A4").unwrap();
/// let tint = Color::WHITE.mix(&purple, 0.5);
/// assert!(tint.l > purple.l);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma: 0.0 (gray) to ~0.37 (most vivid in sRGB).
    pub c: f32,

    /// Hue angle in degrees, 0.0 to 360.0.
    pub h: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB values.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#RGB` and `#RRGGBB`, with or without the leading `#`.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let (r, g, b) = parse_hex_rgb(s)?;
        Some(Self::rgb8(r, g, b))
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Interpolation ───────────────────────────────────────────────────

    /// Mix this color with another in OKLCH space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Hue takes the
    /// shortest path around the wheel. When one side is achromatic (white,
    /// black, grays) its hue is meaningless, so the other side's hue is
    /// held for the whole blend.
    #[must_use]
    pub fn mix(self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(self.h, other.h, t)
        };

        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            c: self.c.mul_add(inv_t, other.c * t),
            h,
        }
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB, clamping each channel to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether this color is within the sRGB gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        const EPS: f32 = 1e-4;
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let range = -EPS..=1.0 + EPS;
        range.contains(&r) && range.contains(&g) && range.contains(&b)
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Binary search for the largest in-gamut chroma, keeping lightness
    /// and hue fixed.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo: f32 = 0.0;
        let mut hi: f32 = self.c;

        for _ in 0..16 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Color Math ──────────────────────────────────────────────────────────────
//
// Oklab math after Björn Ottosson: https://bottosson.github.io/posts/oklab/

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
fn interpolate_hue(h1: f32, h2: f32, t: f32) -> f32 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0 // achromatic, hue undefined
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Goes through the LMS cone-response space; matrices from the Oklab paper.

#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Apply the sRGB transfer curve to a linear component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Remove the sRGB transfer curve from a component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// OKLCH → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse `#RGB` / `#RRGGBB` (the `#` is optional) into byte channels.
///
/// Shared by [`Color::hex`] and [`crate::rgb::hex_to_rgb`] so both agree on
/// what counts as a valid color.
pub(crate) fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB, each digit doubled
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // clamp keeps the value inside 0.0..=255.0 before truncation
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn srgb_to_oklch_roundtrip() {
        let test_colors: [(f32, f32, f32); 8] = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 1.0),
            (1.0, 0.0, 1.0),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let (rr, rg, rb) = Color::srgb(r, g, b).to_srgb();
            assert!(
                approx_eq(r, rr, 0.005) && approx_eq(g, rg, 0.005) && approx_eq(b, rb, 0.005),
                "Roundtrip failed for ({r}, {g}, {b}): got ({rr:.4}, {rg:.4}, {rb:.4})"
            );
        }
    }

    #[test]
    fn material_baseline_hex_survives_roundtrip() {
        for hex in ["#6750a4", "#fffbfe", "#1c1b1f", "#d0bcff", "#b3261e"] {
            assert_eq!(Color::hex(hex).unwrap().to_hex(), hex);
        }
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_short_expands_digits() {
        assert_eq!(parse_hex_rgb("#f53"), Some((0xff, 0x55, 0x33)));
        assert_eq!(parse_hex_rgb("f53"), parse_hex_rgb("ff5533"));
    }

    #[test]
    fn hex_parsing_accepts_mixed_case() {
        assert_eq!(parse_hex_rgb("#6750A4"), Some((103, 80, 164)));
        assert_eq!(parse_hex_rgb("6750a4"), Some((103, 80, 164)));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("#ff000080").is_none());
        assert!(Color::hex("").is_none());
        assert!(Color::hex("#").is_none());
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn black_and_white_lightness() {
        let black = Color::srgb(0.0, 0.0, 0.0);
        let white = Color::srgb(1.0, 1.0, 1.0);
        assert!(approx_eq(black.l, 0.0, 0.001));
        assert!(approx_eq(white.l, 1.0, 0.001));
        assert!(white.is_achromatic() || white.c < 0.001);
    }

    // ── Mix ──────────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let a = Color::oklch(0.3, 0.1, 30.0);
        let b = Color::oklch(0.7, 0.2, 270.0);
        assert_eq!(a.mix(&b, 0.0), a);
        assert_eq!(a.mix(&b, 1.0), b);
    }

    #[test]
    fn mix_at_half_is_midpoint() {
        let a = Color::oklch(0.3, 0.1, 0.0);
        let b = Color::oklch(0.7, 0.3, 0.0);
        let mixed = a.mix(&b, 0.5);
        assert!(approx_eq(mixed.l, 0.5, 0.001));
        assert!(approx_eq(mixed.c, 0.2, 0.001));
    }

    #[test]
    fn mix_hue_takes_shortest_path() {
        let a = Color::oklch(0.5, 0.1, 10.0);
        let b = Color::oklch(0.5, 0.1, 350.0);
        let mixed = a.mix(&b, 0.5);
        assert!(mixed.h < 5.0 || mixed.h > 355.0, "Expected hue near 0/360, got {}", mixed.h);
    }

    #[test]
    fn mix_with_white_keeps_base_hue() {
        let base = Color::oklch(0.5, 0.15, 300.0);
        let tint = Color::WHITE.mix(&base, 0.5);
        assert!(approx_eq(tint.h, 300.0, 0.001));
        assert!(approx_eq(tint.c, 0.075, 0.001));
    }

    // ── Gamut Mapping ────────────────────────────────────────────────────

    #[test]
    fn in_gamut_colors_unchanged() {
        let color = Color::srgb(0.4, 0.6, 0.5);
        assert!(color.in_srgb_gamut());
        assert!(approx_eq(color.c, color.to_gamut().c, 0.001));
    }

    #[test]
    fn out_of_gamut_reduced_to_fit() {
        let color = Color::oklch(0.5, 0.4, 180.0);
        assert!(!color.in_srgb_gamut());
        let mapped = color.to_gamut();
        assert!(mapped.in_srgb_gamut());
        assert!(mapped.c < color.c);
        assert!(approx_eq(mapped.l, color.l, 0.001));
    }

    // ── Display / Debug ──────────────────────────────────────────────────

    #[test]
    fn color_display_hex() {
        assert_eq!(format!("{}", Color::srgb(1.0, 0.0, 0.0)), "#ff0000");
    }

    #[test]
    fn color_debug_format() {
        let dbg = format!("{:?}", Color::oklch(0.5, 0.1, 90.0));
        assert!(dbg.starts_with("Color::oklch("));
    }
}
