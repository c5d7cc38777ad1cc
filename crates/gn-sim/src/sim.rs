//! The `Simulation` struct and its step loop.

use log::{info, warn};

use gn_core::{CellKind, Position, Tick};
use gn_grid::{Grid, GridResult};
use gn_search::Algorithm;
use gn_signal::TrafficSignal;

use crate::traversal;
use crate::{
    Command, PlannerState, ReplanOutcome, RunSummary, SimConfig, SimObserver, StepReport,
    Traversal,
};

/// The route planner for one vehicle on one grid.
///
/// Owns the grid, the signal and the planner state outright; strategies and
/// the replan policy only borrow them for the length of one call.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug)]
pub struct Simulation {
    pub(crate) config:  SimConfig,
    /// The layout restored by [`Command::Reset`].
    pub(crate) initial: Grid,
    pub(crate) grid:    Grid,
    pub(crate) signal:  TrafficSignal,
    pub(crate) planner: PlannerState,
    pub(crate) tick:    Tick,
}

impl Simulation {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn signal(&self) -> &TrafficSignal {
        &self.signal
    }

    pub fn planner(&self) -> &PlannerState {
        &self.planner
    }

    pub fn algorithm(&self) -> Algorithm {
        self.planner.algorithm
    }

    /// The tick the next step will run at.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Current traversal state, read from the planner without stepping.
    pub fn traversal(&self) -> Traversal {
        Traversal::of(&self.planner)
    }

    /// Where the vehicle is drawn: on its path, else at the start cell, else
    /// at the origin.
    pub fn vehicle(&self) -> Position {
        self.planner
            .current_cell()
            .or_else(|| self.grid.locate(CellKind::Start))
            .unwrap_or(Position::ORIGIN)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one step: commands, replan check, traversal, signal advance.
    pub fn step(&mut self, commands: &[Command]) -> StepReport {
        let tick = self.tick;

        let commands_applied = commands.iter().filter(|&&cmd| self.apply(cmd)).count();

        let replan = self.config.replan.evaluate(
            &mut self.grid,
            &mut self.planner,
            self.config.greedy_step_budget,
        );

        let signal_red = self.signal.is_red();
        let traversal  = traversal::advance(&mut self.planner, &self.signal);

        self.signal.advance();
        self.tick = self.tick.offset(1);

        self.report(tick, traversal, replan, signal_red, commands_applied)
    }

    /// Step with no commands until `config.total_ticks` or until the vehicle
    /// reaches the end of its path.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        let mut steps = 0;
        let mut last: Option<StepReport> = None;
        while self.tick < self.config.end_tick() {
            observer.on_step_start(self.tick);
            let report = self.step(&[]);
            observer.on_step_end(&report);
            steps += 1;
            let arrived = report.traversal == Traversal::Arrived;
            last = Some(report);
            if arrived {
                break;
            }
        }
        observer.on_sim_end(self.tick);

        RunSummary {
            steps,
            arrived:          last.as_ref().is_some_and(|r| r.traversal == Traversal::Arrived),
            at_goal:          last.as_ref().is_some_and(|r| r.at_goal),
            path_len:         self.planner.path.len(),
            dynamic_obstacle: self.planner.dynamic_obstacle,
            last,
        }
    }

    /// Run exactly `n` steps with no commands, ignoring `total_ticks` and
    /// arrival.  Returns the last report.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> Option<StepReport> {
        let mut last = None;
        for _ in 0..n {
            observer.on_step_start(self.tick);
            let report = self.step(&[]);
            observer.on_step_end(&report);
            last = Some(report);
        }
        last
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Apply one command.  Returns `false` if it was ignored.
    fn apply(&mut self, cmd: Command) -> bool {
        let edited: GridResult<()> = match cmd {
            Command::ToggleObstacle(p) => self.grid.toggle_obstacle(p).map(|_| ()),
            Command::PlaceStart(p)     => self.grid.set_cell(p, CellKind::Start),
            Command::PlaceGoal(p)      => self.grid.set_cell(p, CellKind::Goal),
            Command::ToggleSignal(p)   => self.grid.toggle_signal(p).map(|_| ()),
            Command::SetAlgorithm(a) => {
                if a != self.planner.algorithm {
                    info!("algorithm switch: {} → {a}", self.planner.algorithm);
                }
                self.planner.algorithm = a;
                Ok(())
            }
            Command::Reset => {
                self.grid = self.initial.clone();
                Ok(())
            }
        };

        if let Err(e) = edited {
            warn!("ignoring command {cmd}: {e}");
            return false;
        }
        self.replan_from_start();
        true
    }

    /// Relocate the signal and rebuild the planner from the start cell.
    fn replan_from_start(&mut self) {
        self.signal.set_position(self.grid.locate(CellKind::Signal));
        self.planner = PlannerState::plan(
            self.planner.algorithm,
            &self.grid,
            self.config.greedy_step_budget,
        );
    }

    fn report(
        &self,
        tick:             Tick,
        traversal:        Traversal,
        replan:           ReplanOutcome,
        signal_red:       bool,
        commands_applied: usize,
    ) -> StepReport {
        let vehicle = self.vehicle();
        StepReport {
            tick,
            vehicle,
            path:             self.planner.path.clone(),
            path_index:       self.planner.path_index,
            dynamic_obstacle: self.planner.dynamic_obstacle,
            algorithm:        self.planner.algorithm,
            traversal,
            replan,
            signal_red,
            commands_applied,
            at_goal:          self.grid.locate(CellKind::Goal) == Some(vehicle),
        }
    }
}
