//! The strategy trait and by-name dispatch.
//!
//! # Pluggability
//!
//! `gn-sim` plans through [`PathFinder`], so a new strategy only needs to
//! implement the trait.  The three built-in strategies are also reachable by
//! identifier through [`Algorithm`] and [`compute_path`], which is how an
//! external UI selects one.

use std::fmt;
use std::str::FromStr;

use log::warn;

use gn_core::Position;
use gn_grid::Grid;

use crate::{AStar, Bfs, GreedyBestFirst, Path, SearchError};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path-search strategy.
///
/// Implementations must:
///
/// - return an empty [`Path`] when the goal is unreachable or either endpoint
///   is blocked or off the grid,
/// - return `[start]` when `start == goal`,
/// - only put traversable cells in the path, one orthogonal step apart,
/// - expand neighbours in [`Grid::neighbors`] order.
pub trait PathFinder: Send + Sync {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Path;
}

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// The built-in strategies, selectable by identifier.
///
/// | Variant  | Identifier |
/// |----------|------------|
/// | `Bfs`    | `"BFS"`    |
/// | `Greedy` | `"Greedy"` |
/// | `AStar`  | `"A*"`     |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "BFS"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "Greedy"))]
    Greedy,
    #[cfg_attr(feature = "serde", serde(rename = "A*"))]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Greedy, Algorithm::AStar];

    /// The external identifier.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bfs    => "BFS",
            Algorithm::Greedy => "Greedy",
            Algorithm::AStar  => "A*",
        }
    }

    /// `true` if the strategy always returns a shortest path when one exists.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Greedy)
    }
}

impl PathFinder for Algorithm {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Path {
        match self {
            Algorithm::Bfs    => Bfs.find_path(grid, start, goal),
            Algorithm::Greedy => GreedyBestFirst::default().find_path(grid, start, goal),
            Algorithm::AStar  => AStar.find_path(grid, start, goal),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_owned()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ── compute_path ──────────────────────────────────────────────────────────────

/// Run the strategy named `algorithm_id` from `start` to `goal`.
///
/// Never fails: an unset endpoint or an unknown identifier yields an empty
/// path (the latter is logged).
pub fn compute_path(
    algorithm_id: &str,
    grid:         &Grid,
    start:        Option<Position>,
    goal:         Option<Position>,
) -> Path {
    let (Some(start), Some(goal)) = (start, goal) else {
        return Path::empty();
    };
    match algorithm_id.parse::<Algorithm>() {
        Ok(algorithm) => algorithm.find_path(grid, start, goal),
        Err(e) => {
            warn!("{e}");
            Path::empty()
        }
    }
}
