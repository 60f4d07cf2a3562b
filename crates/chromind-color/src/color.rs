// SPDX-License-Identifier: MIT
//
// chromind color system: sRGB hex values with an HSL working view.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard notation for these conversions. Renaming them would make the
// code harder to compare against the textbook formulas.
#![allow(clippy::many_single_char_names)]
//
// All channel math is written unfused (no mul_add) so that every platform
// produces the same rounded hex output for the same input.
#![allow(clippy::suboptimal_flops)]
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ Color (u8 × 3) → Hsl (f64, hue in turns) → Rgb (f64, 0–255) → Color
//
// `Rgb` is unclamped: HSL math can drift a hair outside the
// displayable range, and the single place that rounds and clamps is
// `Color::from_rgb`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8-bit channels.
///
/// Equality is channel equality, so two hex spellings that differ only in
/// case compare equal once parsed.
///
/// # Examples
///
/// ```
/// use chromind_color::Color;
///
/// let base = Color::parse_hex(" #3366FF ").unwrap();
/// assert_eq!(base.to_hex(), "#3366ff");
///
/// let complement = base.rotate_hue(180.0);
/// assert_eq!(complement.to_hex_upper(), "#FFCC33");
///
/// let lighter = base.adjust_lightness(0.18);
/// assert_eq!(lighter.to_string(), "#8fabff");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse user text as a `#RRGGBB` color.
    ///
    /// Surrounding whitespace and a single leading `#` are ignored, and the
    /// digits are case-insensitive. Anything other than exactly six hex
    /// digits is rejected; nothing is silently corrected.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Length`] when the digit count is not six and
    /// [`FormatError::InvalidDigit`] when a character is not hexadecimal.
    pub fn parse_hex(input: &str) -> Result<Self, FormatError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let count = digits.chars().count();
        if count != 6 {
            return Err(FormatError::Length { input: input.to_owned(), digits: count });
        }
        if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidDigit { input: input.to_owned(), found });
        }

        // Six ASCII hex digits, so byte slicing is safe from here on.
        let bytes = digits.as_bytes();
        Ok(Self::rgb8(
            parse_hex_byte(&bytes[0..2]),
            parse_hex_byte(&bytes[2..4]),
            parse_hex_byte(&bytes[4..6]),
        ))
    }

    /// Build a color from floating-point channels on the 0–255 scale.
    ///
    /// Each channel is rounded to the nearest integer first and clamped to
    /// [0, 255] afterwards. A NaN channel encodes as 0.
    #[must_use]
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgb8(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Build a color from an HSL triple (round + clamp per channel).
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_rgb().into()
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The 8-bit channels as an `(r, g, b)` tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`, the form used for display labels.
    #[must_use]
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL with every component in [0, 1).
    ///
    /// Achromatic colors (r = g = b) report a hue and saturation of zero.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max8 = self.r.max(self.g).max(self.b);
        let min8 = self.r.min(self.g).min(self.b);
        let max = f64::from(max8) / 255.0;
        let min = f64::from(min8) / 255.0;
        let l = (max + min) / 2.0;

        if max8 == min8 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        // Ties go to red, then green, matching the usual switch order.
        let h = if max8 == self.r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max8 == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h / 6.0, s, l }
    }

    // ─── Perceptual operations ───────────────────────────────────────────

    /// Rotate the hue by `degrees`.
    ///
    /// Any offset is accepted: negative values and values past a full turn
    /// wrap back into [0, 360).
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        let mut h = (hsl.h + degrees / 360.0) % 1.0;
        if h < 0.0 {
            h += 1.0;
        }
        Self::from_hsl(Hsl { h, ..hsl })
    }

    /// Shift HSL lightness by `delta`, clamped to [0, 1].
    #[must_use]
    pub fn adjust_lightness(self, delta: f64) -> Self {
        let hsl = self.to_hsl();
        let l = (hsl.l + delta).clamp(0.0, 1.0);
        Self::from_hsl(Hsl { l, ..hsl })
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

// ─── Hsl / Rgb ───────────────────────────────────────────────────────────────

/// Hue, saturation and lightness, each in [0, 1]. Hue is measured in turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Floating-point channels on the 0–255 scale, not yet rounded or clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Hsl {
    /// Convert to unclamped sRGB channels.
    ///
    /// Zero saturation yields a gray of `l * 255` on every channel.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, l } = self;
        if s == 0.0 {
            let gray = l * 255.0;
            return Rgb { r: gray, g: gray, b: gray };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb {
            r: hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            g: hue_to_channel(p, q, h) * 255.0,
            b: hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        }
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── Input helpers ───────────────────────────────────────────────────────────

/// Reduce free-form text to at most six lowercase hex digits behind a `#`.
///
/// This is the forgiving path for live text fields: stray characters are
/// dropped rather than rejected. The result still has to pass
/// [`Color::parse_hex`], which fails when fewer than six digits survive.
#[must_use]
pub fn sanitize_hex_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(6)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    format!("#{digits}")
}

#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[inline]
const fn parse_hex_byte(bytes: &[u8]) -> u8 {
    hex_digit(bytes[0]) << 4 | hex_digit(bytes[1])
}

/// Round to the nearest integer, then clamp to a channel.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp bounds the value to 0.0..=255.0 (NaN saturates to 0).
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
