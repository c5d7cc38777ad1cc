//! Greedy best-first walk.
//!
//! A deliberately naive local strategy: at each step move to the unvisited
//! traversable neighbour closest (Manhattan) to the goal, first neighbour in
//! expansion order winning ties.  Moves are never undone.  In a concave
//! pocket the walk can run out of unvisited neighbours and stop short of the
//! goal even though a route exists; the partial walk is returned as-is and
//! the caller decides what to do with it.

use log::{trace, warn};

use gn_core::Position;
use gn_grid::Grid;

use crate::path::trivial_result;
use crate::{Path, PathFinder};

/// Greedy best-first search with a bounded step budget.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyBestFirst {
    /// Maximum number of moves.  `None` uses the grid's cell count.  Smaller
    /// values are raised to the cell count so the budget never ends a walk
    /// that could otherwise have reached the goal.
    pub step_budget: Option<usize>,
}

impl GreedyBestFirst {
    pub fn with_budget(step_budget: Option<usize>) -> Self {
        Self { step_budget }
    }

    /// The budget actually applied on `grid`.
    pub fn effective_budget(&self, grid: &Grid) -> usize {
        let floor = grid.cell_count();
        self.step_budget.map_or(floor, |b| b.max(floor))
    }
}

impl PathFinder for GreedyBestFirst {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Path {
        trace!("greedy: {start} → {goal}");
        if let Some(path) = trivial_result(grid, start, goal) {
            return path;
        }

        let mut visited = vec![false; grid.cell_count()];
        if let Some(i) = grid.index(start) {
            visited[i] = true;
        }

        let mut cells = vec![start];
        let mut cur = start;

        for _ in 0..self.effective_budget(grid) {
            if cur == goal {
                break;
            }

            // `min_by_key` keeps the first of equal minima, i.e. the earliest
            // neighbour in expansion order.
            let best = grid
                .traversable_neighbors(cur)
                .filter(|&n| grid.index(n).is_some_and(|i| !visited[i]))
                .min_by_key(|&n| n.manhattan(goal));

            let Some(next) = best else { break };
            if let Some(i) = grid.index(next) {
                visited[i] = true;
            }
            cells.push(next);
            cur = next;
        }

        if cur != goal {
            warn!(
                "greedy search stuck at {cur} after {} moves, {} short of goal {goal}",
                cells.len() - 1,
                cur.manhattan(goal)
            );
        }
        Path::from(cells)
    }
}
