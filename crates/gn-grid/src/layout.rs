//! Layout loading and generation.
//!
//! # File format
//!
//! One grid row per line, cells separated by commas, no header.  Whitespace
//! around markers is ignored and blank lines are skipped.
//!
//! ```text
//! S,0,0,0,1,0,0
//! 0,1,1,T,1,0,0
//! 0,0,0,0,0,0,0
//! 1,1,0,1,1,1,0
//! 0,0,0,0,0,0,G
//! ```
//!
//! | Marker     | Kind       |
//! |------------|------------|
//! | `0` or `.` | `Free`     |
//! | `1` or `#` | `Obstacle` |
//! | `S`        | `Start`    |
//! | `G`        | `Goal`     |
//! | `T`        | `Signal`   |
//!
//! The layout is read once at startup; the simulation keeps its own copy for
//! resets and never writes layouts back.

use std::io::Read;
use std::path::Path;

use log::debug;

use gn_core::{CellKind, LayoutRng, Position};

use crate::{Grid, GridError, GridResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a layout from a file.
pub fn load_layout(path: &Path) -> GridResult<Grid> {
    let file = std::fs::File::open(path)?;
    let grid = parse_layout(file)?;
    debug!(
        "loaded {}x{} layout from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Like [`load_layout`] but accepts any `Read` source.
///
/// Useful for testing (pass `text.as_bytes()`) or for layouts embedded in a
/// binary.
pub fn parse_layout<R: Read>(reader: R) -> GridResult<Grid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut matrix: Vec<Vec<CellKind>> = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, token)| {
                token
                    .parse::<CellKind>()
                    .map_err(|source| GridError::Marker { row, col, source })
            })
            .collect::<GridResult<Vec<_>>>()?;
        matrix.push(cells);
    }

    Grid::from_rows(matrix)
}

/// Generate a `rows × cols` grid with `Start` at the top-left, `Goal` at the
/// bottom-right, and every other cell an obstacle with probability `density`.
///
/// The same `seed` always produces the same grid.  Nothing guarantees the
/// goal is reachable; callers that need that should check with a search.
pub fn random_layout(rows: usize, cols: usize, density: f64, seed: u64) -> GridResult<Grid> {
    if rows * cols < 2 {
        return Err(GridError::TooSmall { rows, cols });
    }

    let mut rng  = LayoutRng::new(seed);
    let mut grid = Grid::new(rows, cols);
    for i in 0..grid.cell_count() {
        if rng.gen_bool(density) {
            grid.set_cell(grid.position_of(i), CellKind::Obstacle)?;
        }
    }

    grid.set_cell(Position::ORIGIN, CellKind::Start)?;
    grid.set_cell(
        Position::new(rows as i32 - 1, cols as i32 - 1),
        CellKind::Goal,
    )?;
    Ok(grid)
}
