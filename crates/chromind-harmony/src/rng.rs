// SPDX-License-Identifier: MIT

//! Random sources for palette generation.
//!
//! Two variants behind one trait:
//!
//! - [`SeededRng`]: a 32-bit mulberry32 generator. Same seed, same stream,
//!   on every platform. All arithmetic is wrapping `u32`.
//! - [`EntropyRng`]: draws from the operating system CSPRNG. No
//!   reproducibility at all.
//!
//! [`Source`] picks one from an optional seed, so callers never touch the
//! platform entropy API directly.

use rand::RngCore;
use rand::rngs::OsRng;

/// Counter increment for each mulberry32 step (odd, so the counter cycles
/// through all 2^32 states).
pub const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, the divisor that maps a `u32` draw into [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A source of uniform floats in [0, 1).
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `min..=max`.
    ///
    /// The span is taken in `f64`, so ranges wider than `i64` can represent
    /// still draw; results past the ends saturate.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn random_int(&mut self, min: i64, max: i64) -> i64 {
        let span = max as f64 - min as f64 + 1.0;
        ((self.next_f64() * span).floor() as i64).saturating_add(min)
    }
}

// ---------------------------------------------------------------------------
// SeededRng (mulberry32)
// ---------------------------------------------------------------------------

/// Advance a mulberry32 counter by one step.
///
/// Returns `(output, new_state)`. The output is the raw 32-bit draw; see
/// [`next`] for the float form.
#[must_use]
pub const fn next_state(state: u32) -> (u32, u32) {
    let t = state.wrapping_add(INCREMENT);
    let mut r = (t ^ (t >> 15)).wrapping_mul(t | 1);
    r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(r | 61));
    (r ^ (r >> 14), t)
}

/// Draw one float in [0, 1) from `state`, returning it with the new state.
#[must_use]
pub fn next(state: u32) -> (f64, u32) {
    let (output, state) = next_state(state);
    (f64::from(output) / TWO_POW_32, state)
}

/// Deterministic generator owning one mulberry32 counter.
///
/// Not `Clone`: each stream has a single owner. Build a second instance
/// from the same seed to replay it.
#[derive(Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current counter value.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Next raw 32-bit draw.
    pub const fn next_u32(&mut self) -> u32 {
        let (output, state) = next_state(self.state);
        self.state = state;
        output
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        let (value, state) = next(self.state);
        self.state = state;
        value
    }
}

// ---------------------------------------------------------------------------
// EntropyRng
// ---------------------------------------------------------------------------

/// Non-deterministic source backed by the OS random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropyRng;

impl RandomSource for EntropyRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(OsRng.next_u32()) / TWO_POW_32
    }
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// A random source chosen by whether a seed was supplied.
#[derive(Debug)]
pub enum Source {
    Seeded(SeededRng),
    Entropy(EntropyRng),
}

impl Source {
    #[must_use]
    pub const fn from_seed(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SeededRng::new(seed)),
            None => Self::Entropy(EntropyRng),
        }
    }

    #[must_use]
    pub const fn is_deterministic(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

impl RandomSource for Source {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Seeded(rng) => rng.next_f64(),
            Self::Entropy(rng) => rng.next_f64(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
