//! Per-step and per-run results.

use gn_core::{Position, Tick};
use gn_search::{Algorithm, Path};

use crate::{ReplanOutcome, Traversal};

/// Everything an external renderer or recorder needs after one step.
///
/// Owned: `path` is a copy, so the report outlives the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The tick this step ran at.
    pub tick: Tick,

    /// Where to draw the vehicle: `path[path_index]`, else the start cell,
    /// else the origin.
    pub vehicle: Position,

    pub path:             Path,
    pub path_index:       usize,
    pub dynamic_obstacle: Option<Position>,
    pub algorithm:        Algorithm,

    pub traversal: Traversal,
    pub replan:    ReplanOutcome,

    /// The phase the traversal saw, before the signal advanced.
    pub signal_red: bool,

    /// Commands applied at the top of this step (ignored ones excluded).
    pub commands_applied: usize,

    /// `true` if the vehicle is on the goal cell.
    pub at_goal: bool,
}

/// Result of [`Simulation::run`][crate::Simulation::run].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub steps:            u64,
    pub arrived:          bool,
    pub at_goal:          bool,
    /// Length of the path held at the end of the run.
    pub path_len:         usize,
    pub dynamic_obstacle: Option<Position>,
    pub last:             Option<StepReport>,
}
