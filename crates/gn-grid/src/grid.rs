//! Occupancy grid representation.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec<CellKind>`:
//!
//! ```text
//! cells[ row * cols + col ]
//! ```
//!
//! The dimensions are fixed at construction.  Search strategies size their
//! per-cell scratch tables with [`Grid::cell_count`] and address them with
//! [`Grid::index`], so a lookup is a bounds check plus one multiply.
//!
//! # Unique kinds
//!
//! `Start`, `Goal` and `Signal` appear at most once.  [`Grid::set_cell`]
//! clears the previous occurrence before writing, so placing one of them
//! always *moves* it.

use std::fmt;

use gn_core::{CellKind, Position};

use crate::{GridError, GridResult};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Fixed-size 2-D array of [`CellKind`].
///
/// Owns all cell state; callers mutate only through the methods below so the
/// uniqueness rule cannot be bypassed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// An all-`Free` grid of `rows × cols` cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellKind::Free; rows * cols],
        }
    }

    /// Build a grid from a row-major matrix of kinds.
    ///
    /// Fails if the matrix is empty, ragged, or holds more than one `Start`,
    /// `Goal` or `Signal`.
    pub fn from_rows(matrix: Vec<Vec<CellKind>>) -> GridResult<Self> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in matrix.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged { row: r, expected: cols, got: row.len() });
            }
            cells.extend(row);
        }

        let grid = Self { rows, cols, cells };
        grid.check_unique()?;
        Ok(grid)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows × cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ── Addressing ────────────────────────────────────────────────────────

    /// `true` if `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Row-major index of `pos`, or `None` if it is out of bounds.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// The kind at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, pos: Position) -> Option<CellKind> {
        self.index(pos).map(|i| self.cells[i])
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `false` if `pos` is out of bounds or an obstacle; `true` otherwise.
    #[inline]
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.kind(pos).is_some_and(CellKind::is_traversable)
    }

    /// The four orthogonal neighbours of `pos` in the fixed expansion order
    /// up, down, left, right.  Not filtered, may include out-of-bounds
    /// positions.
    #[inline]
    pub fn neighbors(&self, pos: Position) -> [Position; 4] {
        pos.orthogonal()
    }

    /// [`neighbors`][Self::neighbors] restricted to traversable cells, order
    /// preserved.
    pub fn traversable_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.orthogonal()
            .into_iter()
            .filter(move |&n| self.is_traversable(n))
    }

    /// First cell of `kind` in row-major order.
    pub fn locate(&self, kind: CellKind) -> Option<Position> {
        self.cells
            .iter()
            .position(|&k| k == kind)
            .map(|i| self.position_of(i))
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Iterator over `(Position, CellKind)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &k)| (self.position_of(i), k))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Write `kind` at `pos`.
    ///
    /// For `Start`, `Goal` and `Signal` any existing cell of that kind is
    /// first reset to `Free`.  `Free` and `Obstacle` overwrite whatever is
    /// there, including a unique kind.
    pub fn set_cell(&mut self, pos: Position, kind: CellKind) -> GridResult<()> {
        let idx = self.checked_index(pos)?;
        if kind.is_unique() {
            for cell in self.cells.iter_mut().filter(|c| **c == kind) {
                *cell = CellKind::Free;
            }
        }
        self.cells[idx] = kind;
        Ok(())
    }

    /// Flip `Free` ↔ `Obstacle` at `pos`.  Unique kinds are left alone.
    ///
    /// Returns the kind now at `pos`.
    pub fn toggle_obstacle(&mut self, pos: Position) -> GridResult<CellKind> {
        let idx = self.checked_index(pos)?;
        let next = match self.cells[idx] {
            CellKind::Free     => CellKind::Obstacle,
            CellKind::Obstacle => CellKind::Free,
            other              => other,
        };
        self.cells[idx] = next;
        Ok(next)
    }

    /// Place the signal at `pos`, or remove it if it is already there.
    ///
    /// Returns the signal's new position (`None` after removal).
    pub fn toggle_signal(&mut self, pos: Position) -> GridResult<Option<Position>> {
        let idx = self.checked_index(pos)?;
        if self.cells[idx] == CellKind::Signal {
            self.cells[idx] = CellKind::Free;
            return Ok(None);
        }
        self.set_cell(pos, CellKind::Signal)?;
        Ok(Some(pos))
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Text rendering, one line per row.  Free cells on `path` are drawn as
    /// `*`; everything else uses its layout marker.
    pub fn render(&self, path: &[Position]) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for r in 0..self.rows {
            for c in 0..self.cols {
                let pos  = Position::new(r as i32, c as i32);
                let kind = self.cells[r * self.cols + c];
                if kind == CellKind::Free && path.contains(&pos) {
                    out.push('*');
                } else {
                    out.push(kind.marker());
                }
            }
            out.push('\n');
        }
        out
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn checked_index(&self, pos: Position) -> GridResult<usize> {
        self.index(pos).ok_or(GridError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn check_unique(&self) -> GridResult<()> {
        for kind in [CellKind::Start, CellKind::Goal, CellKind::Signal] {
            let mut seen = self.iter().filter(|&(_, k)| k == kind).map(|(p, _)| p);
            if let (Some(first), Some(second)) = (seen.next(), seen.next()) {
                return Err(GridError::Duplicate { kind, first, second });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}
