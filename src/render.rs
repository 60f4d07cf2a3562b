// SPDX-License-Identifier: MIT
//
// Terminal presentation: palette swatches and simulation tables.
//
// Swatches are 24-bit ANSI background blocks. The label text on each block
// is near-black or white, whichever the contrast heuristic picks for that
// background. Tables show the first rows of a history and, when cut short,
// an ellipsis row followed by the final state.

use std::io::{self, Write};

use chromind_harmony::contrast::choose_readable_text_color;
use chromind_harmony::{PaletteEntry, PalettePlan};
use chromind_sim::{SimulationHistory, SimulationState};

/// Rows shown before a simulation table is truncated.
pub const TABLE_ROW_LIMIT: usize = 60;

const RESET: &str = "\x1b[0m";

// ─── Palettes ────────────────────────────────────────────────────────────────

/// One swatch line: a colored block holding the hex code, then the role.
pub fn swatch(entry: &PaletteEntry) -> String {
    let bg = entry.color;
    let fg = choose_readable_text_color(bg);
    let marker = if entry.is_accent { '*' } else { ' ' };
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {marker} {} {RESET} {}",
        bg.r,
        bg.g,
        bg.b,
        fg.r,
        fg.g,
        fg.b,
        bg.to_hex_upper(),
        entry.role,
    )
}

pub fn write_plan(out: &mut impl Write, plan: &PalettePlan) -> io::Result<()> {
    writeln!(out, "{}  ({} colors)", plan.title, plan.len())?;
    if !plan.subtitle.is_empty() {
        writeln!(out, "{}", plan.subtitle)?;
    }
    for entry in &plan.colors {
        writeln!(out, "  {}", swatch(entry))?;
    }
    writeln!(out)
}

// ─── Simulation table ────────────────────────────────────────────────────────

/// A line of the simulation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableRow {
    State(usize, SimulationState),
    /// Marks skipped steps between the shown prefix and the final state.
    Ellipsis,
}

/// Choose which rows to show for `history`, at most `limit` leading states.
///
/// A truncated table ends with an ellipsis and the last state, so the final
/// populations are always visible.
pub fn table_rows(history: &SimulationHistory, limit: usize) -> Vec<TableRow> {
    let shown = history.len().min(limit);
    let mut rows: Vec<TableRow> = history
        .iter()
        .take(shown)
        .enumerate()
        .map(|(step, state)| TableRow::State(step, *state))
        .collect();

    if let Some(last) = history.last().filter(|_| history.len() > shown) {
        rows.push(TableRow::Ellipsis);
        rows.push(TableRow::State(history.len() - 1, *last));
    }
    rows
}

pub fn write_table(out: &mut impl Write, history: &SimulationHistory, limit: usize) -> io::Result<()> {
    writeln!(out, "{:>6}  {:>12}  {:>12}", "step", "prey", "predator")?;
    for row in table_rows(history, limit) {
        match row {
            TableRow::State(step, state) => {
                writeln!(out, "{step:>6}  {:>12.2}  {:>12.2}", state.prey, state.predator)?;
            }
            TableRow::Ellipsis => writeln!(out, "{:>6}", "…")?,
        }
    }
    writeln!(out, "peak population: {:.2}", history.peak())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chromind_color::Color;
    use chromind_harmony::Role;
    use chromind_sim::{SimulationParams, simulate};
    use pretty_assertions::assert_eq;

    fn history(steps: usize) -> SimulationHistory {
        simulate(&SimulationParams { steps, ..SimulationParams::default() })
    }

    #[test]
    fn short_history_is_shown_whole() {
        let rows = table_rows(&history(4), TABLE_ROW_LIMIT);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| matches!(row, TableRow::State(..))));
    }

    #[test]
    fn exact_fit_has_no_ellipsis() {
        let rows = table_rows(&history(59), TABLE_ROW_LIMIT);
        assert_eq!(rows.len(), 60);
        assert!(!rows.contains(&TableRow::Ellipsis));
    }

    #[test]
    fn long_history_is_truncated_with_final_state() {
        let h = history(200);
        let rows = table_rows(&h, TABLE_ROW_LIMIT);
        assert_eq!(rows.len(), 62);
        assert_eq!(rows[59], TableRow::State(59, h.states()[59]));
        assert_eq!(rows[60], TableRow::Ellipsis);
        assert_eq!(rows[61], TableRow::State(200, *h.last().unwrap()));
    }

    #[test]
    fn table_text_uses_two_decimals() {
        let mut out = Vec::new();
        write_table(&mut out, &history(0), TABLE_ROW_LIMIT).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("10.00"), "{text}");
        assert!(text.contains("5.00"), "{text}");
        assert!(text.contains("peak population: 10.00"), "{text}");
    }

    #[test]
    fn swatch_on_light_background_uses_dark_text() {
        let line = swatch(&PaletteEntry::new(Color::WHITE, Role::Base));
        assert!(line.contains("48;2;255;255;255"), "{line:?}");
        assert!(line.contains("38;2;17;17;17"), "{line:?}");
        assert!(line.contains("#FFFFFF"));
        assert!(line.ends_with("Base"));
    }

    #[test]
    fn accent_swatch_is_marked() {
        let line = swatch(&PaletteEntry::accent(Color::rgb8(0x33, 0x66, 0xff), Role::Accent));
        assert!(line.contains("38;2;255;255;255"), "{line:?}");
        assert!(line.contains(" * #3366FF "), "{line:?}");
    }

    #[test]
    fn plan_block_lists_every_swatch() {
        let [pair, _] = chromind_harmony::generate("#3366ff", 2).unwrap();
        let mut out = Vec::new();
        write_plan(&mut out, &pair).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Complementary pair  (2 colors)"), "{text}");
        assert!(text.contains("#3366FF") && text.contains("#FFCC33"), "{text}");
    }
}
