// SPDX-License-Identifier: MIT

//! Harmony palettes: the bridge from one base color to a ranked set of
//! swatches.
//!
//! A [`HarmonySet`] holds every color derived from the base (complement,
//! analogs, triad partners, lightness variants). Plans are then cut from
//! it: a fixed complementary pair, and a custom set of 2 to 7 colors that
//! is deduplicated, backfilled when short, and keeps the accent in the
//! second slot.

use std::fmt;

use chromind_color::{Color, FormatError, Hsl};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::contrast::{ensure_accent_contrast, is_light};

/// Smallest custom palette.
pub const MIN_COUNT: usize = 2;

/// Largest custom palette.
pub const MAX_COUNT: usize = 7;

/// Custom palette size offered when the caller has no preference.
pub const DEFAULT_COUNT: usize = 4;

/// Hue/saturation/lightness step between backfilled variations.
const BACKFILL_STEP: f64 = 0.08;

// ---------------------------------------------------------------------------
// Plan types
// ---------------------------------------------------------------------------

/// What a swatch is for. Descriptive only; no computation depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Base,
    Accent,
    ComplementAccent,
    SubAccent,
    Balance,
    Contrast,
    Contrast2,
    Neutral,
    Highlight,
    Shadow,
    /// Backfilled variation, numbered by its slot in the palette.
    Variation(usize),
    /// Random palette entry, numbered from 1.
    Swatch(usize),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("Base"),
            Self::Accent => f.write_str("Accent"),
            Self::ComplementAccent => f.write_str("Complementary accent"),
            Self::SubAccent => f.write_str("Sub-accent"),
            Self::Balance => f.write_str("Balance"),
            Self::Contrast => f.write_str("Contrast"),
            Self::Contrast2 => f.write_str("Contrast 2"),
            Self::Neutral => f.write_str("Neutral"),
            Self::Highlight => f.write_str("Highlight"),
            Self::Shadow => f.write_str("Shadow"),
            Self::Variation(n) => write!(f, "Variation {n}"),
            Self::Swatch(n) => write!(f, "Color {n}"),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One swatch of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub color: Color,
    pub role: Role,
    pub is_accent: bool,
}

impl PaletteEntry {
    #[must_use]
    pub const fn new(color: Color, role: Role) -> Self {
        Self { color, role, is_accent: false }
    }

    #[must_use]
    pub const fn accent(color: Color, role: Role) -> Self {
        Self { color, role, is_accent: true }
    }
}

/// A titled, ordered group of swatches.
///
/// Index 0 holds the base color whenever the plan has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalettePlan {
    pub title: String,
    pub subtitle: String,
    pub colors: Vec<PaletteEntry>,
}

impl PalettePlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The swatch colors in order.
    pub fn swatches(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().map(|entry| entry.color)
    }
}

// ---------------------------------------------------------------------------
// HarmonySet
// ---------------------------------------------------------------------------

/// Every color derived from one base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonySet {
    pub base: Color,
    /// Complement, pushed away from the base if it lacks contrast.
    pub accent: Color,
    /// Base rotated +30°.
    pub analog_warm: Color,
    /// Base rotated −30°.
    pub analog_cool: Color,
    /// Base rotated +120°.
    pub secondary: Color,
    /// Base rotated −120°.
    pub tertiary: Color,
    /// Base with lightness moved 0.22 toward the middle.
    pub neutral: Color,
    pub highlight: Color,
    pub shadow: Color,
    /// Warm analog, slightly darker.
    pub vivid_analog: Color,
    /// Cool analog, lighter.
    pub soft_analog: Color,
}

impl HarmonySet {
    /// Derive the full harmony set for `base`.
    #[must_use]
    pub fn derive(base: Color) -> Self {
        let accent = ensure_accent_contrast(base, base.rotate_hue(180.0));
        let analog_warm = base.rotate_hue(30.0);
        let analog_cool = base.rotate_hue(-30.0);
        let neutral_shift = if is_light(base) { -0.22 } else { 0.22 };

        Self {
            base,
            accent,
            analog_warm,
            analog_cool,
            secondary: base.rotate_hue(120.0),
            tertiary: base.rotate_hue(-120.0),
            neutral: base.adjust_lightness(neutral_shift),
            highlight: base.adjust_lightness(0.18),
            shadow: base.adjust_lightness(-0.18),
            vivid_analog: analog_warm.adjust_lightness(-0.05),
            soft_analog: analog_cool.adjust_lightness(0.12),
        }
    }

    /// Both plans: the complementary pair, then the custom set.
    #[must_use]
    pub fn plans(&self, desired_count: usize) -> [PalettePlan; 2] {
        [self.complementary_pair(), self.custom(desired_count)]
    }

    /// The fixed two-color plan: base plus its contrast-checked complement.
    #[must_use]
    pub fn complementary_pair(&self) -> PalettePlan {
        PalettePlan {
            title: "Complementary pair".to_owned(),
            subtitle: "The base color with its complementary accent.".to_owned(),
            colors: vec![
                PaletteEntry::new(self.base, Role::Base),
                PaletteEntry::accent(self.accent, Role::ComplementAccent),
            ],
        }
    }

    /// The custom plan sized to `desired_count`, clamped to 2..=7.
    #[must_use]
    pub fn custom(&self, desired_count: usize) -> PalettePlan {
        let count = effective_count(desired_count);
        let colors = if count == MIN_COUNT {
            self.two_color_set()
        } else {
            let unique = dedup(self.candidates());
            let filled = backfill(self.base, unique, count);
            let size = count.min(filled.len());
            promote_accent(filled.into_iter().take(size).collect())
        };

        PalettePlan {
            title: format!("{}-color suggestion", colors.len()),
            subtitle: "An accented palette sized to the requested count.".to_owned(),
            colors,
        }
    }

    /// Candidates in priority order, duplicates included.
    const fn candidates(&self) -> [PaletteEntry; 9] {
        [
            PaletteEntry::new(self.base, Role::Base),
            PaletteEntry::accent(self.accent, Role::Accent),
            PaletteEntry::new(self.vivid_analog, Role::SubAccent),
            PaletteEntry::new(self.soft_analog, Role::Balance),
            PaletteEntry::new(self.secondary, Role::Contrast),
            PaletteEntry::new(self.tertiary, Role::Contrast2),
            PaletteEntry::new(self.neutral, Role::Neutral),
            PaletteEntry::new(self.highlight, Role::Highlight),
            PaletteEntry::new(self.shadow, Role::Shadow),
        ]
    }

    /// Two-color plans use the vivid analog as accent, not the complement.
    fn two_color_set(&self) -> Vec<PaletteEntry> {
        let accent = if self.vivid_analog == self.base {
            ensure_accent_contrast(self.base, self.base.rotate_hue(45.0))
        } else {
            self.vivid_analog
        };
        vec![
            PaletteEntry::new(self.base, Role::Base),
            PaletteEntry::accent(accent, Role::Accent),
        ]
    }
}

/// Clamp a requested palette size into the supported range.
#[must_use]
pub const fn effective_count(desired_count: usize) -> usize {
    if desired_count < MIN_COUNT {
        MIN_COUNT
    } else if desired_count > MAX_COUNT {
        MAX_COUNT
    } else {
        desired_count
    }
}

/// Keep the first entry for each color, preserving order.
fn dedup(candidates: impl IntoIterator<Item = PaletteEntry>) -> Vec<PaletteEntry> {
    let mut unique: Vec<PaletteEntry> = Vec::with_capacity(MAX_COUNT + 2);
    for entry in candidates {
        if !contains_color(&unique, entry.color) {
            unique.push(entry);
        }
    }
    unique
}

/// Append HSL variations of `base` until `count` entries exist.
///
/// Stops at the first variation that duplicates an existing color, so the
/// result may come up short. Each pass either grows the list or ends it.
fn backfill(base: Color, mut entries: Vec<PaletteEntry>, count: usize) -> Vec<PaletteEntry> {
    let hsl = base.to_hsl();
    while entries.len() < count {
        let slot = entries.len();
        let offset = step_offset(slot);
        let lightness = if slot % 2 == 0 { hsl.l + offset } else { hsl.l - offset };
        let variation = Color::from_hsl(Hsl {
            h: (hsl.h + offset) % 1.0,
            s: (hsl.s + offset).clamp(0.45, 1.0),
            l: lightness.clamp(0.2, 0.8),
        });

        if contains_color(&entries, variation) {
            debug!(%base, %variation, slot, count, "backfill collided, palette left short");
            break;
        }
        entries.push(PaletteEntry::new(variation, Role::Variation(slot)));
    }
    entries
}

#[allow(clippy::cast_precision_loss)]
fn step_offset(slot: usize) -> f64 {
    (slot + 1) as f64 * BACKFILL_STEP
}

/// Move the first accent found past index 1 into index 1.
fn promote_accent(mut entries: Vec<PaletteEntry>) -> Vec<PaletteEntry> {
    let misplaced = entries.iter().position(|entry| entry.is_accent).filter(|&index| index > 1);
    if let Some(index) = misplaced {
        let accent = entries.remove(index);
        entries.insert(1, accent);
        debug!(from = index, "accent promoted to second slot");
    }
    entries
}

fn contains_color(entries: &[PaletteEntry], color: Color) -> bool {
    entries.iter().any(|entry| entry.color == color)
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse `base` and build the complementary pair and the custom plan.
///
/// # Errors
///
/// Returns [`FormatError`] when `base` is not a `#RRGGBB` color. Nothing is
/// generated in that case.
pub fn generate(base: &str, desired_count: usize) -> Result<[PalettePlan; 2], FormatError> {
    let base = Color::parse_hex(base)?;
    Ok(generate_from(base, desired_count))
}

/// Build both plans for an already-parsed base color.
#[must_use]
pub fn generate_from(base: Color, desired_count: usize) -> [PalettePlan; 2] {
    HarmonySet::derive(base).plans(desired_count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{ACCENT_MIN_CONTRAST, contrast_ratio};
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::parse_hex(s).unwrap()
    }

    fn entries(plan: &PalettePlan) -> Vec<(String, Role, bool)> {
        plan.colors.iter().map(|e| (e.color.to_hex(), e.role, e.is_accent)).collect()
    }

    fn row(s: &str, role: Role, is_accent: bool) -> (String, Role, bool) {
        (s.to_owned(), role, is_accent)
    }

    // ── Derivation ──────────────────────────────────────────────────

    #[test]
    fn derive_known_base() {
        let set = HarmonySet::derive(hex("#3366ff"));
        assert_eq!(set.accent, hex("#ffcc33"));
        assert_eq!(set.vivid_analog, hex("#5319ff"));
        assert_eq!(set.soft_analog, hex("#70dbff"));
        assert_eq!(set.secondary, hex("#ff3366"));
        assert_eq!(set.tertiary, hex("#66ff33"));
        assert_eq!(set.neutral, hex("#a3baff"));
        assert_eq!(set.highlight, hex("#8fabff"));
    }

    #[test]
    fn neutral_darkens_light_bases() {
        let set = HarmonySet::derive(Color::WHITE);
        assert_eq!(set.neutral, hex("#c7c7c7"));
    }

    // ── Complementary pair ──────────────────────────────────────────

    #[test]
    fn complementary_pair_for_blue() {
        let [pair, _] = generate("#3366ff", 2).unwrap();
        assert_eq!(
            entries(&pair),
            vec![row("#3366ff", Role::Base, false), row("#ffcc33", Role::ComplementAccent, true)]
        );
        let ratio = contrast_ratio(pair.colors[0].color, pair.colors[1].color);
        assert!(ratio >= ACCENT_MIN_CONTRAST, "ratio: {ratio}");
    }

    #[test]
    fn complementary_pair_is_independent_of_count() {
        let [a, _] = generate("#3366ff", 3).unwrap();
        let [b, _] = generate("#3366ff", 7).unwrap();
        assert_eq!(a, b);
    }

    // ── Custom plan ─────────────────────────────────────────────────

    #[test]
    fn two_colors_use_vivid_analog() {
        let [_, custom] = generate("#3366ff", 2).unwrap();
        assert_eq!(
            entries(&custom),
            vec![row("#3366ff", Role::Base, false), row("#5319ff", Role::Accent, true)]
        );
        assert_eq!(custom.title, "2-color suggestion");
    }

    #[test]
    fn two_colors_fall_back_when_analog_matches_base() {
        // Black has no hue to rotate and cannot get darker.
        let [_, custom] = generate("#000000", 2).unwrap();
        assert_eq!(
            entries(&custom),
            vec![row("#000000", Role::Base, false), row("#5cffff", Role::Accent, true)]
        );
    }

    #[test]
    fn four_colors_for_blue() {
        let [_, custom] = generate("#3366ff", 4).unwrap();
        assert_eq!(
            entries(&custom),
            vec![
                row("#3366ff", Role::Base, false),
                row("#ffcc33", Role::Accent, true),
                row("#5319ff", Role::SubAccent, false),
                row("#70dbff", Role::Balance, false),
            ]
        );
    }

    #[test]
    fn seven_colors_for_blue() {
        let [_, custom] = generate("#3366FF", 7).unwrap();
        let hexes: Vec<String> = custom.swatches().map(Color::to_hex).collect();
        assert_eq!(
            hexes,
            vec!["#3366ff", "#ffcc33", "#5319ff", "#70dbff", "#ff3366", "#66ff33", "#a3baff"]
        );
        assert_eq!(custom.title, "7-color suggestion");
    }

    #[test]
    fn count_is_clamped() {
        for (desired, expected) in [(0, 2), (1, 2), (2, 2), (5, 5), (8, 7), (100, 7)] {
            let [_, custom] = generate("#3366ff", desired).unwrap();
            assert_eq!(custom.len(), expected, "desired {desired}");
        }
    }

    #[test]
    fn black_is_backfilled_with_variations() {
        let [_, custom] = generate("#000000", 7).unwrap();
        assert_eq!(
            entries(&custom),
            vec![
                row("#000000", Role::Base, false),
                row("#5cffff", Role::Accent, true),
                row("#1f1f1f", Role::Balance, false),
                row("#383838", Role::Neutral, false),
                row("#2e2e2e", Role::Highlight, false),
                row("#1b4b46", Role::Variation(5), false),
                row("#50a0ce", Role::Variation(6), false),
            ]
        );
    }

    #[test]
    fn white_is_backfilled_with_variations() {
        let [_, custom] = generate("#ffffff", 7).unwrap();
        let hexes: Vec<String> = custom.swatches().map(Color::to_hex).collect();
        assert_eq!(
            hexes,
            vec!["#ffffff", "#00a3a3", "#f2f2f2", "#c7c7c7", "#d1d1d1", "#4abfb1", "#afd4e9"]
        );
    }

    #[test]
    fn invalid_base_is_an_error() {
        assert!(matches!(generate("#12345", 4), Err(FormatError::Length { .. })));
        assert!(matches!(generate("#gg0000", 4), Err(FormatError::InvalidDigit { .. })));
    }

    // ── Building blocks ─────────────────────────────────────────────

    #[test]
    fn dedup_keeps_first_occurrence() {
        let red = hex("#ff0000");
        let blue = hex("#0000ff");
        let unique = dedup([
            PaletteEntry::new(red, Role::Base),
            PaletteEntry::new(blue, Role::Contrast),
            PaletteEntry::new(red, Role::Shadow),
        ]);
        assert_eq!(
            unique,
            vec![PaletteEntry::new(red, Role::Base), PaletteEntry::new(blue, Role::Contrast)]
        );
    }

    #[test]
    fn backfill_sweeps_offsets() {
        let base = Color::BLACK;
        let filled = backfill(base, vec![PaletteEntry::new(base, Role::Base)], 3);
        assert_eq!(
            filled,
            vec![
                PaletteEntry::new(base, Role::Base),
                PaletteEntry::new(hex("#4a481c"), Role::Variation(1)),
                PaletteEntry::new(hex("#415922"), Role::Variation(2)),
            ]
        );
    }

    #[test]
    fn backfill_stops_on_collision() {
        let base = Color::BLACK;
        let start = vec![
            PaletteEntry::new(base, Role::Base),
            PaletteEntry::new(hex("#415922"), Role::Neutral),
        ];
        let filled = backfill(base, start.clone(), 5);
        assert_eq!(filled, start);
    }

    #[test]
    fn backfill_noop_when_full() {
        let start = vec![PaletteEntry::new(Color::WHITE, Role::Base); 3];
        assert_eq!(backfill(Color::WHITE, start.clone(), 3), start);
    }

    #[test]
    fn accent_is_promoted_to_second_slot() {
        let a = PaletteEntry::new(hex("#111111"), Role::Base);
        let b = PaletteEntry::new(hex("#222222"), Role::SubAccent);
        let c = PaletteEntry::new(hex("#333333"), Role::Balance);
        let accent = PaletteEntry::accent(hex("#444444"), Role::Accent);
        assert_eq!(promote_accent(vec![a, b, c, accent]), vec![a, accent, b, c]);
        assert_eq!(promote_accent(vec![a, accent, b]), vec![a, accent, b]);
        assert_eq!(promote_accent(vec![a, b]), vec![a, b]);
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::Base.to_string(), "Base");
        assert_eq!(Role::Variation(5).to_string(), "Variation 5");
        assert_eq!(Role::Swatch(1).to_string(), "Color 1");
        assert_ne!(Role::Base.to_string(), Role::Accent.to_string());
    }

    // ── Properties ──────────────────────────────────────────────────

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn custom_plan_has_exact_count_of_unique_colors(
                r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), desired in 0usize..12,
            ) {
                let base = Color::rgb8(r, g, b);
                let [pair, custom] = generate_from(base, desired);

                prop_assert_eq!(pair.len(), 2);
                prop_assert_eq!(custom.len(), effective_count(desired));
                prop_assert_eq!(custom.colors[0].color, base);
                prop_assert!(custom.colors[1].is_accent);

                let mut seen: Vec<Color> = Vec::new();
                for color in custom.swatches() {
                    prop_assert!(!seen.contains(&color), "duplicate {color} for base {base}");
                    seen.push(color);
                }
            }
        }
    }
}
