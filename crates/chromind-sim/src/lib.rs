// SPDX-License-Identifier: MIT
//
// chromind-sim: predator-prey population dynamics.
//
// A fixed-step forward Euler integrator for the two-species Lotka–Volterra
// system. Parameters come from code, CLI flags or a TOML file; the output
// is an immutable history ready for charting or tabulation.

pub mod config;
pub mod lotka_volterra;

pub use config::ConfigError;
pub use lotka_volterra::{SimulationHistory, SimulationParams, SimulationState, simulate};
