// SPDX-License-Identifier: MIT

//! # chromind-harmony: palette generation
//!
//! Turns one base color into readable, harmonious palettes, and draws
//! reproducible random palettes from a seed.
//!
//! # Architecture
//!
//! ```text
//! "#rrggbb" + desired count
//!     │
//!     ▼
//! chromind-color: parse, HSL view, hue/lightness transforms
//!     │
//!     ▼
//! contrast.rs:  WCAG luminance/contrast, accent fallback
//!     │
//!     ▼
//! harmony.rs:   HarmonySet → complementary pair + custom plan
//!
//! size + optional seed
//!     │
//!     ▼
//! rng.rs:       mulberry32 (seeded) or OS entropy
//!     │
//!     ▼
//! random.rs:    uniform RGB colors, r/g/b draw order
//! ```
//!
//! Every entry point is a pure function of its inputs, except the entropy
//! source.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Luminance weights are applied unfused so results match across platforms.
#![allow(clippy::suboptimal_flops)]

pub mod contrast;
pub mod harmony;
pub mod random;
pub mod rng;

pub use harmony::{HarmonySet, PaletteEntry, PalettePlan, Role, generate, generate_from};
pub use random::{random_palette, random_plan};
pub use rng::{RandomSource, SeededRng, Source};
