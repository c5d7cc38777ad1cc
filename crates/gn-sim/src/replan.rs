//! Dynamic-obstacle injection.
//!
//! Once per plan, the policy drops an obstacle on a Free cell a few steps
//! ahead of the vehicle and re-plans around it.  The obstacle is only kept
//! if the new search, from the vehicle's cell, still reaches the goal;
//! otherwise the cell is restored within the same call.  Rejections and
//! reverts leave the policy armed for the next step.

use std::fmt;

use log::{debug, info, warn};

use gn_core::{CellKind, Position};
use gn_grid::Grid;

use crate::planner::search;
use crate::{PlannerState, ReplanPolicy};

/// What the policy did this step.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ReplanOutcome {
    /// Not evaluated: disabled, no path, already fired, or the vehicle is
    /// too early or too late on its path.
    #[default]
    Idle,
    /// The candidate was Start, Goal, Signal or already an Obstacle.
    InvalidTarget { candidate: Position, kind: CellKind },
    /// Blocking the candidate would cut the vehicle off from the goal; the
    /// cell was reverted.
    WouldStrandGoal { candidate: Position },
    /// The obstacle was kept and the path replaced.
    Committed { obstacle: Position },
}

impl ReplanOutcome {
    pub fn is_committed(self) -> bool {
        matches!(self, ReplanOutcome::Committed { .. })
    }

    /// The cell the policy looked at, if it got that far.
    pub fn candidate(self) -> Option<Position> {
        match self {
            ReplanOutcome::Idle => None,
            ReplanOutcome::InvalidTarget { candidate, .. }
            | ReplanOutcome::WouldStrandGoal { candidate } => Some(candidate),
            ReplanOutcome::Committed { obstacle } => Some(obstacle),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReplanOutcome::Idle                  => "idle",
            ReplanOutcome::InvalidTarget { .. }  => "invalid_target",
            ReplanOutcome::WouldStrandGoal { .. } => "would_strand_goal",
            ReplanOutcome::Committed { .. }      => "committed",
        }
    }
}

impl fmt::Display for ReplanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.candidate() {
            Some(c) => write!(f, "{} {c}", self.as_str()),
            None    => f.write_str(self.as_str()),
        }
    }
}

impl ReplanPolicy {
    /// The cell the policy would block this step, if every precondition
    /// holds.
    pub fn candidate(&self, state: &PlannerState) -> Option<Position> {
        if !self.enabled || state.dynamic_obstacle.is_some() || state.path.is_empty() {
            return None;
        }
        if state.path_index < self.min_progress
            || state.remaining_steps() < self.lookahead_offset
        {
            return None;
        }
        state.path.get(state.path_index + self.lookahead_offset)
    }

    /// Evaluate the policy once, mutating `grid` and `state` on commit.
    pub fn evaluate(
        &self,
        grid:          &mut Grid,
        state:         &mut PlannerState,
        greedy_budget: Option<usize>,
    ) -> ReplanOutcome {
        let Some(candidate) = self.candidate(state) else {
            return ReplanOutcome::Idle;
        };
        let (Some(from), Some(goal)) = (state.current_cell(), grid.locate(CellKind::Goal)) else {
            return ReplanOutcome::Idle;
        };
        let Some(prior) = grid.kind(candidate) else {
            return ReplanOutcome::Idle;
        };
        if prior != CellKind::Free {
            debug!("replan: candidate {candidate} is {prior}, not blocking it");
            return ReplanOutcome::InvalidTarget { candidate, kind: prior };
        }

        if grid.set_cell(candidate, CellKind::Obstacle).is_err() {
            return ReplanOutcome::Idle;
        }
        let path = search(state.algorithm, greedy_budget, grid, from, goal);

        if path.reaches(goal) {
            info!(
                "replan: dynamic obstacle at {candidate}, new {} path of {} steps from {from}",
                state.algorithm,
                path.steps()
            );
            state.path             = path;
            state.path_index       = 0;
            state.dynamic_obstacle = Some(candidate);
            ReplanOutcome::Committed { obstacle: candidate }
        } else {
            if let Err(e) = grid.set_cell(candidate, prior) {
                warn!("replan: could not restore {candidate}: {e}");
            }
            debug!("replan: blocking {candidate} would strand the goal from {from}, reverted");
            ReplanOutcome::WouldStrandGoal { candidate }
        }
    }
}
