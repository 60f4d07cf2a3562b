// SPDX-License-Identifier: MIT

//! WCAG luminance and contrast, plus the two legibility heuristics the
//! palette views rely on.
//!
//! - Swatch text: near-black on bright swatches, white otherwise.
//! - Accent colors: an accent must stay at least 2.5:1 away from its base,
//!   or it is replaced by a fixed opposite-hue fallback.
//!
//! The fallback is computed once and not re-checked. Some hue/lightness
//! combinations land below 2.5:1 even after the swap.

use chromind_color::{Color, Hsl};
use tracing::debug;

/// Minimum contrast an accent must keep against its base color.
pub const ACCENT_MIN_CONTRAST: f64 = 2.5;

/// Backgrounds brighter than this get dark text.
pub const TEXT_LUMINANCE_THRESHOLD: f64 = 0.55;

/// Colors brighter than this count as "light" for neutral derivation.
pub const LIGHT_LUMINANCE_THRESHOLD: f64 = 0.6;

/// Text color used on bright swatches.
pub const DARK_TEXT: Color = Color::rgb8(0x11, 0x11, 0x11);

/// Text color used on dark swatches.
pub const LIGHT_TEXT: Color = Color::WHITE;

/// Linearize one 8-bit sRGB channel (WCAG 2.x transfer function).
fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0], independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick a text color for a swatch painted in `bg`.
#[must_use]
pub fn choose_readable_text_color(bg: Color) -> Color {
    if relative_luminance(bg) > TEXT_LUMINANCE_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Whether a color reads as light. Uses its own threshold, a little above
/// the text-color cutoff.
#[must_use]
pub fn is_light(color: Color) -> bool {
    relative_luminance(color) > LIGHT_LUMINANCE_THRESHOLD
}

/// Keep `candidate` as the accent for `base` if it is distinct enough,
/// otherwise synthesize a replacement.
///
/// The replacement sits half a turn away from the base hue, with
/// saturation `max(0.6, 1 - s)` and lightness 0.32 for light-leaning bases
/// (l > 0.5) or 0.68 for dark-leaning ones.
#[must_use]
pub fn ensure_accent_contrast(base: Color, candidate: Color) -> Color {
    let ratio = contrast_ratio(base, candidate);
    if candidate != base && ratio >= ACCENT_MIN_CONTRAST {
        return candidate;
    }

    let hsl = base.to_hsl();
    let fallback = Color::from_hsl(Hsl {
        h: (hsl.h + 0.5) % 1.0,
        s: (1.0 - hsl.s).max(0.6),
        l: if hsl.l > 0.5 { 0.32 } else { 0.68 },
    });
    debug!(%base, %candidate, ratio, %fallback, "accent too close to base, using fallback");
    fallback
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
