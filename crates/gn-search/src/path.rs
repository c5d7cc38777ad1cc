//! The `Path` value returned by every strategy.

use std::fmt;

use log::debug;

use gn_core::Position;
use gn_grid::Grid;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered list of cells from the search start towards the goal.
///
/// Consecutive cells are one orthogonal step apart.  An empty path means the
/// search found nothing (or was never attempted).  A Greedy search may return
/// a non-empty path whose last cell is not the goal; check with
/// [`reaches`][Self::reaches].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    /// The "no path" value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path that starts and ends at `pos`.
    pub fn single(pos: Position) -> Self {
        Self { cells: vec![pos] }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Cell at step `index`.
    pub fn get(&self, index: usize) -> Option<Position> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// `true` if the path is non-empty and ends at `goal`.
    pub fn reaches(&self, goal: Position) -> bool {
        self.last() == Some(goal)
    }

    /// Number of moves (one less than the cell count; zero when empty).
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// `true` if every consecutive pair is exactly one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// `true` if every cell is traversable on `grid`.
    pub fn is_clear_on(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&p| grid.is_traversable(p))
    }
}

impl From<Vec<Position>> for Path {
    fn from(cells: Vec<Position>) -> Self {
        Self { cells }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cells.is_empty() {
            return f.write_str("[]");
        }
        let parts: Vec<String> = self.cells.iter().map(Position::to_string).collect();
        write!(f, "[{}]", parts.join(" → "))
    }
}

// ── Shared search helpers ─────────────────────────────────────────────────────

/// Resolve the cases every strategy answers before searching.
///
/// Returns `Some(path)` when the answer is already known: an empty path if
/// either endpoint is blocked or off the grid, a single-cell path if
/// `start == goal`.  `None` means a real search is needed.
pub(crate) fn trivial_result(grid: &Grid, start: Position, goal: Position) -> Option<Path> {
    if !grid.is_traversable(start) || !grid.is_traversable(goal) {
        debug!("search skipped: endpoint {start} or {goal} is blocked or off the grid");
        return Some(Path::empty());
    }
    if start == goal {
        return Some(Path::single(start));
    }
    None
}

/// Walk parent links from `goal` back to `start`, then reverse.
///
/// `parent` is indexed by [`Grid::index`].  Returns an empty path if the
/// chain breaks before reaching `start`.
pub(crate) fn reconstruct(
    grid:   &Grid,
    parent: &[Option<Position>],
    start:  Position,
    goal:   Position,
) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        match grid.index(cur).and_then(|i| parent[i]) {
            Some(prev) => {
                cells.push(prev);
                cur = prev;
            }
            None => return Path::empty(),
        }
    }
    cells.reverse();
    Path::from(cells)
}
