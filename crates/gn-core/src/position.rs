//! Grid coordinates and the Manhattan metric.
//!
//! `Position` is a signed `(row, col)` pair.  Signed components let callers
//! form the neighbours of border cells (e.g. `(-1, 0)`) and reject them with a
//! bounds check instead of wrapping or panicking.

use std::fmt;

/// The four orthogonal step offsets, in the fixed expansion order used by
/// every search strategy: up, down, left, right.
///
/// The order is part of the contract: it is the tie-break source for BFS and
/// Greedy and must never be reordered.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell coordinate on the occupancy grid.
///
/// Ordering is lexicographic by `(row, col)` (field order), which A* relies on
/// to break ties between equal-`f` queue entries deterministically.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// The grid origin `(0, 0)`.
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `|Δrow| + |Δcol|` between `self` and `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The position displaced by `(d_row, d_col)`.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Position {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// The four orthogonal neighbours in [`ORTHOGONAL_OFFSETS`] order.
    ///
    /// No bounds check; the grid filters out-of-range results.
    #[inline]
    pub fn orthogonal(self) -> [Position; 4] {
        ORTHOGONAL_OFFSETS.map(|(dr, dc)| self.offset(dr, dc))
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
