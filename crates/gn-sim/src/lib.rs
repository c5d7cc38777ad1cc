//! `gn-sim` — the step driver for the gridnav route planner.
//!
//! # One step
//!
//! ```text
//! Simulation::step(commands):
//!   ① Commands   — grid edits, algorithm switch, reset.  Every applied
//!                  command rebuilds the PlannerState from the start cell.
//!   ② Replan     — ReplanPolicy may commit one dynamic obstacle ahead of
//!                  the vehicle, but only if the goal stays reachable.
//!   ③ Traversal  — advance path_index by one, unless held at a red signal.
//!   ④ Signal     — TrafficSignal::advance, every step without exception.
//! ```
//!
//! `step` never fails: every failure mode (unreachable goal, stuck greedy
//! walk, rejected or reverted replan) is reported in the returned
//! [`StepReport`] and logged.  Only setup ([`SimConfig`] loading,
//! [`SimBuilder::build`]) returns errors.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gn_grid::load_layout;
//! use gn_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let grid = load_layout("campus.csv".as_ref())?;
//! let mut sim = SimBuilder::new(grid, SimConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod error;
pub mod observer;
pub mod planner;
pub mod replan;
pub mod report;
pub mod sim;
pub mod traversal;


pub use builder::SimBuilder;
pub use command::Command;
pub use config::{ReplanPolicy, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use planner::PlannerState;
pub use replan::ReplanOutcome;
pub use report::{RunSummary, StepReport};
pub use sim::Simulation;
pub use traversal::Traversal;
