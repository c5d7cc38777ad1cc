//! Per-plan state: active strategy, current path, and progress along it.

use log::{debug, warn};

use gn_core::{CellKind, Position};
use gn_grid::Grid;
use gn_search::{Algorithm, GreedyBestFirst, Path, PathFinder, SearchError, classify};

/// Everything that belongs to one plan.
///
/// Replaced wholesale (never patched) on algorithm switch, grid edit, or
/// reset, which also re-arms the one-shot replan policy.
///
/// Invariant: `path_index < path.len()` whenever `path` is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerState {
    pub algorithm:        Algorithm,
    pub path:             Path,
    pub path_index:       usize,
    /// The obstacle committed by the replan policy, once it has fired.
    pub dynamic_obstacle: Option<Position>,
}

impl PlannerState {
    /// A state with no path.
    pub fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            path:             Path::empty(),
            path_index:       0,
            dynamic_obstacle: None,
        }
    }

    /// Plan from the grid's start cell to its goal cell.
    pub fn plan(algorithm: Algorithm, grid: &Grid, greedy_budget: Option<usize>) -> Self {
        let start = grid.locate(CellKind::Start);
        let goal  = grid.locate(CellKind::Goal);
        let path = match (start, goal) {
            (Some(s), Some(g)) => search(algorithm, greedy_budget, grid, s, g),
            _ => Path::empty(),
        };

        match classify(&path, start, goal) {
            Ok(()) => debug!("{algorithm}: planned {} steps", path.steps()),
            Err(e @ SearchError::Stuck { .. }) => warn!("{algorithm}: {e}"),
            Err(e) => debug!("{algorithm}: {e}"),
        }

        Self { path, ..Self::empty(algorithm) }
    }

    /// The cell the vehicle occupies, if there is a path.
    #[inline]
    pub fn current_cell(&self) -> Option<Position> {
        self.path.get(self.path_index)
    }

    /// Steps left before the end of the path.
    pub fn remaining_steps(&self) -> usize {
        self.path.len().saturating_sub(self.path_index + 1)
    }

    pub fn at_end(&self) -> bool {
        !self.path.is_empty() && self.remaining_steps() == 0
    }
}

/// Run `algorithm`, applying the configured move budget to the greedy walk.
pub(crate) fn search(
    algorithm:     Algorithm,
    greedy_budget: Option<usize>,
    grid:          &Grid,
    from:          Position,
    goal:          Position,
) -> Path {
    match algorithm {
        Algorithm::Greedy => GreedyBestFirst::with_budget(greedy_budget).find_path(grid, from, goal),
        other             => other.find_path(grid, from, goal),
    }
}
