// SPDX-License-Identifier: MIT
//
// chromind: color harmony, random palettes and predator-prey simulation
// from the terminal.
//
// Each subcommand is a thin shell over one library entry point:
//
//   palette  → chromind_harmony::generate     → complementary pair + custom plan
//   random   → chromind_harmony::random_plan  → one plan of uniform colors
//   simulate → chromind_sim::simulate         → population history
//
// Results go to stdout as ANSI swatches and tables, or as JSON with --json.
// Diagnostics go to stderr through tracing; set RUST_LOG=debug to see the
// palette fallbacks and backfill decisions.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use chromind_color::sanitize_hex_input;
use chromind_harmony::harmony::{DEFAULT_COUNT, MIN_COUNT, effective_count};
use chromind_harmony::{generate, random_plan};
use chromind_sim::{SimulationParams, simulate};

/// Color harmony and population simulation toolkit
#[derive(Parser, Debug)]
#[command(name = "chromind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit JSON instead of swatches and tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Suggest harmony palettes for a base color
    Palette {
        /// Base color as #RRGGBB
        base: String,

        /// Number of colors in the custom palette (clamped to 2..=7)
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT as i64, allow_negative_numbers = true)]
        count: i64,

        /// Drop non-hex characters from the base before parsing
        #[arg(long)]
        lenient: bool,
    },

    /// Draw a uniform random palette
    Random {
        /// Number of colors (negative means none)
        #[arg(short = 'n', long, default_value = "5", allow_negative_numbers = true)]
        size: i64,

        /// Seed for a reproducible palette
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Run the Lotka-Volterra predator-prey simulation
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// TOML file with simulation parameters (flags override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prey birth rate
    #[arg(long, allow_negative_numbers = true)]
    alpha: Option<f64>,

    /// Predation rate
    #[arg(long, allow_negative_numbers = true)]
    beta: Option<f64>,

    /// Predator death rate
    #[arg(long, allow_negative_numbers = true)]
    gamma: Option<f64>,

    /// Predator growth per prey eaten
    #[arg(long, allow_negative_numbers = true)]
    delta: Option<f64>,

    /// Initial prey population
    #[arg(long)]
    prey: Option<f64>,

    /// Initial predator population
    #[arg(long)]
    predator: Option<f64>,

    /// Number of Euler steps
    #[arg(long)]
    steps: Option<usize>,

    /// Step size
    #[arg(long)]
    dt: Option<f64>,

    /// Table rows shown before truncating
    #[arg(long, default_value_t = render::TABLE_ROW_LIMIT)]
    rows: usize,
}

impl SimulateArgs {
    /// Defaults, then the config file, then individual flags.
    fn params(&self) -> Result<SimulationParams> {
        let mut params = match &self.config {
            Some(path) => SimulationParams::load(path)
                .with_context(|| format!("loading simulation config {}", path.display()))?,
            None => SimulationParams::default(),
        };

        let overrides = [
            (&mut params.alpha, self.alpha),
            (&mut params.beta, self.beta),
            (&mut params.gamma, self.gamma),
            (&mut params.delta, self.delta),
            (&mut params.prey_initial, self.prey),
            (&mut params.predator_initial, self.predator),
            (&mut params.dt, self.dt),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(steps) = self.steps {
            params.steps = steps;
        }
        Ok(params)
    }
}

/// Any requested palette size is usable: negatives count as the minimum,
/// everything else is clamped to the supported range.
fn palette_count(raw: i64) -> usize {
    usize::try_from(raw).map_or(MIN_COUNT, effective_count)
}

fn random_size(raw: i64) -> usize {
    usize::try_from(raw).unwrap_or(0)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Palette { base, count, lenient } => {
            let input = if lenient { sanitize_hex_input(&base) } else { base.clone() };
            let count = palette_count(count);
            info!(base = %input, count, "generating palettes");
            let plans = generate(&input, count)
                .with_context(|| format!("cannot build a palette from {base:?}"))?;

            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&plans)?)?;
            } else {
                for plan in &plans {
                    render::write_plan(&mut out, plan)?;
                }
            }
        }

        Commands::Random { size, seed } => {
            let size = random_size(size);
            info!(size, ?seed, "drawing random palette");
            let plan = random_plan(size, seed);

            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
            } else {
                render::write_plan(&mut out, &plan)?;
            }
        }

        Commands::Simulate(args) => {
            let params = args.params()?;
            info!(?params, "running simulation");
            let history = simulate(&params);

            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&history)?)?;
            } else {
                render::write_table(&mut out, &history, args.rows)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

// ─── Tests ───────────────────────────────────────────────────────────────────
