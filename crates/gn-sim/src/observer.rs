//! Simulation observer trait for progress reporting and data collection.

use gn_core::Tick;

use crate::StepReport;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] and
/// [`run_ticks`][crate::Simulation::run_ticks].
///
/// All methods default to no-ops so implementors only override what they
/// need.
///
/// # Example — arrival logger
///
/// ```rust,ignore
/// struct ArrivalLogger;
///
/// impl SimObserver for ArrivalLogger {
///     fn on_step_end(&mut self, report: &StepReport) {
///         if report.at_goal {
///             println!("{}: at goal {}", report.tick, report.vehicle);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each step, with the tick it will run at.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each step.
    fn on_step_end(&mut self, _report: &StepReport) {}

    /// Called once when `run` stops.  `final_tick` is the next tick that
    /// would run.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
