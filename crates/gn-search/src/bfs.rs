//! Breadth-first search.

use std::collections::VecDeque;

use log::trace;

use gn_core::Position;
use gn_grid::Grid;

use crate::path::{reconstruct, trivial_result};
use crate::{Path, PathFinder};

/// First-in-first-out frontier expansion.
///
/// Every cell is enqueued at most once, so the first time the goal is
/// dequeued its parent chain is a minimum-length route.  This is the
/// correctness baseline the other strategies are measured against.
#[derive(Copy, Clone, Debug, Default)]
pub struct Bfs;

impl PathFinder for Bfs {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Path {
        trace!("bfs: {start} → {goal}");
        if let Some(path) = trivial_result(grid, start, goal) {
            return path;
        }

        let n = grid.cell_count();
        let mut visited = vec![false; n];
        // parent[i] = cell that first discovered cell i.
        let mut parent: Vec<Option<Position>> = vec![None; n];
        let mut queue: VecDeque<Position> = VecDeque::new();

        if let Some(i) = grid.index(start) {
            visited[i] = true;
        }
        queue.push_back(start);

        while let Some(cur) = queue.pop_front() {
            if cur == goal {
                return reconstruct(grid, &parent, start, goal);
            }

            for next in grid.traversable_neighbors(cur) {
                let Some(i) = grid.index(next) else { continue };
                if !visited[i] {
                    visited[i] = true;
                    parent[i]  = Some(cur);
                    queue.push_back(next);
                }
            }
        }

        trace!("bfs: frontier exhausted, {goal} unreachable from {start}");
        Path::empty()
    }
}
