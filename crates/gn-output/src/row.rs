//! Plain data row types written by output backends.

use gn_core::Position;
use gn_search::Path;
use gn_sim::StepReport;

/// One simulation step, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub tick:             u64,
    pub algorithm:        &'static str,
    pub vehicle:          Position,
    pub path_index:       usize,
    pub path_len:         usize,
    pub traversal:        &'static str,
    pub signal_red:       bool,
    pub replan:           &'static str,
    /// The cell the replan policy looked at this step.
    pub replan_candidate: Option<Position>,
    pub dynamic_obstacle: Option<Position>,
    pub commands_applied: usize,
    pub at_goal:          bool,
}

impl StepRow {
    pub fn from_report(report: &StepReport) -> Self {
        Self {
            tick:             report.tick.0,
            algorithm:        report.algorithm.id(),
            vehicle:          report.vehicle,
            path_index:       report.path_index,
            path_len:         report.path.len(),
            traversal:        report.traversal.as_str(),
            signal_red:       report.signal_red,
            replan:           report.replan.as_str(),
            replan_candidate: report.replan.candidate(),
            dynamic_obstacle: report.dynamic_obstacle,
            commands_applied: report.commands_applied,
            at_goal:          report.at_goal,
        }
    }
}

/// One cell of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCellRow {
    /// Tick at which the path was first reported.
    pub tick: u64,
    /// Position of the cell within the path, from 0.
    pub seq:  usize,
    pub cell: Position,
}

impl PathCellRow {
    pub fn from_path(tick: u64, path: &Path) -> Vec<Self> {
        path.cells()
            .iter()
            .enumerate()
            .map(|(seq, &cell)| Self { tick, seq, cell })
            .collect()
    }
}
