// SPDX-License-Identifier: MIT

//! Uniform random palettes.
//!
//! Each color takes three draws from the source, red then green then blue,
//! colors filled left to right. That order is part of the seeded contract:
//! changing it changes every palette a seed produces.

use chromind_color::Color;

use crate::harmony::{PaletteEntry, PalettePlan, Role};
use crate::rng::{RandomSource, Source};

/// Draw `size` colors, seeded when `seed` is given, from OS entropy otherwise.
#[must_use]
pub fn random_palette(size: usize, seed: Option<u32>) -> Vec<Color> {
    let mut source = Source::from_seed(seed);
    random_palette_with(size, &mut source)
}

/// Draw `size` colors from an existing source, advancing it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn random_palette_with<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Vec<Color> {
    (0..size)
        .map(|_| {
            let r = rng.random_int(0, 255);
            let g = rng.random_int(0, 255);
            let b = rng.random_int(0, 255);
            Color::from_rgb(r as f64, g as f64, b as f64)
        })
        .collect()
}

/// A random palette wrapped as a displayable plan, swatches numbered from 1.
#[must_use]
pub fn random_plan(size: usize, seed: Option<u32>) -> PalettePlan {
    let colors = random_palette(size, seed)
        .into_iter()
        .enumerate()
        .map(|(i, color)| PaletteEntry::new(color, Role::Swatch(i + 1)))
        .collect();

    let subtitle = match seed {
        Some(seed) => format!("{size} colors · seed {seed}"),
        None => format!("{size} colors"),
    };

    PalettePlan { title: "Random palette".to_owned(), subtitle, colors }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
