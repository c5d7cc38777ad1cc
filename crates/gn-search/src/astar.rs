//! A* search with the Manhattan heuristic.
//!
//! # Tie-breaking
//!
//! The open set is a min-heap of `(f, Position)`.  Equal-`f` entries are
//! ordered by position (`(row, col)` lexicographically), never by insertion
//! order.  Changing the key changes which of several equal-cost paths comes
//! back.
//!
//! # Relaxation
//!
//! A neighbour's `g` is only lowered on a strict improvement, and each
//! improvement pushes a fresh entry.  Older entries for the same cell stay in
//! the heap and are discarded when popped by comparing against the `g` table;
//! no separate closed set is kept.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use gn_core::Position;
use gn_grid::Grid;

use crate::path::{reconstruct, trivial_result};
use crate::{Path, PathFinder};

/// Uniform-cost A*; returns paths of the same length as [`Bfs`][crate::Bfs].
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl PathFinder for AStar {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Path {
        trace!("astar: {start} → {goal}");
        if let Some(path) = trivial_result(grid, start, goal) {
            return path;
        }

        let n = grid.cell_count();
        // g_score[i] = fewest known steps from start to cell i.
        let mut g_score = vec![u32::MAX; n];
        let mut parent: Vec<Option<Position>> = vec![None; n];

        if let Some(i) = grid.index(start) {
            g_score[i] = 0;
        }

        // Reverse turns BinaryHeap (max) into a min-heap on (f, position).
        let mut open: BinaryHeap<Reverse<(u32, Position)>> = BinaryHeap::new();
        open.push(Reverse((start.manhattan(goal), start)));

        while let Some(Reverse((f, cur))) = open.pop() {
            if cur == goal {
                return reconstruct(grid, &parent, start, goal);
            }

            let Some(ci) = grid.index(cur) else { continue };
            let g_cur = g_score[ci];

            // Skip stale heap entries.
            if f > g_cur.saturating_add(cur.manhattan(goal)) {
                continue;
            }

            for next in grid.traversable_neighbors(cur) {
                let Some(ni) = grid.index(next) else { continue };
                let tentative = g_cur + 1;
                if tentative < g_score[ni] {
                    g_score[ni] = tentative;
                    parent[ni]  = Some(cur);
                    open.push(Reverse((tentative + next.manhattan(goal), next)));
                }
            }
        }

        trace!("astar: open set exhausted, {goal} unreachable from {start}");
        Path::empty()
    }
}
