//! Fluent builder for constructing a [`Simulation`].

use gn_core::{CellKind, Tick};
use gn_grid::Grid;
use gn_search::Algorithm;
use gn_signal::TrafficSignal;

use crate::{PlannerState, ReplanPolicy, SimConfig, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`Grid`] — the initial layout, also restored by `Command::Reset`
/// - [`SimConfig`] — strategy, signal timing, tick limit, replan policy
///
/// # Optional overrides
///
/// | Method                     | Overrides                        |
/// |----------------------------|----------------------------------|
/// | `.algorithm(a)`            | `config.algorithm`               |
/// | `.signal_timing(red, grn)` | `config.red_duration` / `green`  |
/// | `.replan_policy(p)`        | `config.replan`                  |
/// | `.total_ticks(n)`          | `config.total_ticks`             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(grid, SimConfig::default())
///     .algorithm(Algorithm::AStar)
///     .replan_policy(ReplanPolicy::disabled())
///     .build()?;
/// ```
pub struct SimBuilder {
    grid:   Grid,
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(grid: Grid, config: SimConfig) -> Self {
        Self { grid, config }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    pub fn signal_timing(mut self, red: u64, green: u64) -> Self {
        self.config.red_duration   = red;
        self.config.green_duration = green;
        self
    }

    pub fn replan_policy(mut self, policy: ReplanPolicy) -> Self {
        self.config.replan = policy;
        self
    }

    pub fn total_ticks(mut self, n: u64) -> Self {
        self.config.total_ticks = n;
        self
    }

    /// Validate the config, place the signal, and compute the initial plan.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        if self.grid.cell_count() == 0 {
            return Err(SimError::Config("grid has no cells".into()));
        }

        let signal = TrafficSignal::new(
            self.grid.locate(CellKind::Signal),
            self.config.red_duration,
            self.config.green_duration,
        );
        let planner = PlannerState::plan(
            self.config.algorithm,
            &self.grid,
            self.config.greedy_step_budget,
        );

        Ok(Simulation {
            initial: self.grid.clone(),
            grid:    self.grid,
            config:  self.config,
            signal,
            planner,
            tick:    Tick::ZERO,
        })
    }
}
