//! `gn-search` — path-search strategies over the occupancy grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`path`]      | `Path` and the shared parent-pointer reconstruction         |
//! | [`finder`]    | `PathFinder` trait, `Algorithm`, `compute_path`             |
//! | [`bfs`]       | `Bfs` — breadth-first, shortest by step count               |
//! | [`greedy`]    | `GreedyBestFirst` — naive local strategy, may get stuck     |
//! | [`astar`]     | `AStar` — Manhattan-guided, `(f, position)` tie-break       |
//! | [`error`]     | `SearchError`, `classify`                                   |
//!
//! # Contract
//!
//! Every strategy answers `find_path(grid, start, goal) -> Path`.  An empty
//! path means "no route"; it is never an error at this level.  Neighbours are
//! expanded in the grid's fixed order (up, down, left, right), which makes
//! every strategy fully deterministic.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Algorithm`.            |

pub mod astar;
pub mod bfs;
pub mod error;
pub mod finder;
pub mod greedy;
pub mod path;

#[cfg(test)]
mod tests;

pub use astar::AStar;
pub use bfs::Bfs;
pub use error::{SearchError, SearchResult, classify};
pub use finder::{Algorithm, PathFinder, compute_path};
pub use greedy::GreedyBestFirst;
pub use path::Path;
