// SPDX-License-Identifier: MIT
//
// chromind-color: the value layer of the chromind toolkit.
//
// Every color the toolkit hands out is an opaque sRGB triple written as
// `#rrggbb`. HSL is a derived view used for harmony math: hue rotation,
// lightness shifts and the accent fallback all go through it and come
// back as a rounded, clamped hex color.
//
//   user text ─▶ parse_hex ─▶ Color ◀─▶ Hsl ─▶ Rgb (f64) ─▶ Color
//
// Conversions through HSL are lossy. A round trip lands within one unit
// per channel of where it started.

pub mod color;
pub mod error;

pub use color::{Color, Hsl, Rgb, sanitize_hex_input};
pub use error::FormatError;
