// SPDX-License-Identifier: MIT

//! Predator–prey dynamics by explicit Euler integration.
//!
//! ```text
//! dx/dt = alpha·x − beta·x·y        (prey)
//! dy/dt = delta·x·y − gamma·y       (predators)
//! ```
//!
//! The step size is fixed. Large `dt` or rate coefficients make the scheme
//! overshoot; recorded populations are floored at zero, but the running
//! values carry on unclamped into the next step. Non-finite parameters are
//! not rejected, they flow through the arithmetic and show up as NaN in the
//! history.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Inputs to one simulation run.
///
/// Rates of any sign are accepted; only non-negative rates model anything
/// meaningful. Missing fields fall back to [`SimulationParams::default`]
/// when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParams {
    /// Prey birth rate.
    pub alpha: f64,
    /// Predation rate.
    pub beta: f64,
    /// Predator death rate.
    pub gamma: f64,
    /// Predator growth per prey eaten.
    pub delta: f64,
    pub prey_initial: f64,
    pub predator_initial: f64,
    /// Number of Euler steps; the history holds one more state than this.
    pub steps: usize,
    /// Step size.
    pub dt: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            alpha: 1.1,
            beta: 0.4,
            gamma: 0.4,
            delta: 0.1,
            prey_initial: 10.0,
            predator_initial: 5.0,
            steps: 200,
            dt: 0.05,
        }
    }
}

/// Populations at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationState {
    pub prey: f64,
    pub predator: f64,
}

impl SimulationState {
    /// Floor both populations at zero. NaN passes through.
    #[must_use]
    pub fn clamped(prey: f64, predator: f64) -> Self {
        Self { prey: non_negative(prey), predator: non_negative(predator) }
    }
}

/// The recorded trajectory of one run: `steps + 1` states, initial first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SimulationHistory {
    states: Vec<SimulationState>,
}

impl SimulationHistory {
    #[must_use]
    pub fn states(&self) -> &[SimulationState] {
        &self.states
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a history holds at least the initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn get(&self, step: usize) -> Option<&SimulationState> {
        self.states.get(step)
    }

    #[must_use]
    pub fn initial(&self) -> Option<&SimulationState> {
        self.states.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&SimulationState> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationState> {
        self.states.iter()
    }

    /// Largest population in the run, never below 1.0. Chart renderers
    /// scale their y-axis to this.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.states.iter().flat_map(|s| [s.prey, s.predator]).fold(1.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a SimulationHistory {
    type Item = &'a SimulationState;
    type IntoIter = std::slice::Iter<'a, SimulationState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// Time derivatives `(d_prey, d_predator)` at the given populations.
#[must_use]
pub fn derivative(prey: f64, predator: f64, params: &SimulationParams) -> (f64, f64) {
    let prey_growth = params.alpha * prey;
    let predation = params.beta * prey * predator;
    let predator_gain = params.delta * prey * predator;
    let predator_loss = params.gamma * predator;
    (prey_growth - predation, predator_gain - predator_loss)
}

/// Run the simulation.
///
/// Every recorded state is floored at zero, the initial one included, so a
/// negative `prey_initial` or `predator_initial` shows up as 0 at index 0.
#[must_use]
pub fn simulate(params: &SimulationParams) -> SimulationHistory {
    let mut prey = params.prey_initial;
    let mut predator = params.predator_initial;

    let mut states = Vec::with_capacity(params.steps.saturating_add(1));
    states.push(SimulationState::clamped(prey, predator));

    for _ in 0..params.steps {
        let (d_prey, d_predator) = derivative(prey, predator, params);
        prey += d_prey * params.dt;
        predator += d_predator * params.dt;
        states.push(SimulationState::clamped(prey, predator));
    }

    trace!(steps = params.steps, prey, predator, "simulation finished");
    SimulationHistory { states }
}

fn non_negative(v: f64) -> f64 {
    if v < 0.0 { 0.0 } else { v }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
