//! `gn-grid` — the occupancy grid and its layouts.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`grid`]   | `Grid` — cell storage, bounds/adjacency queries, mutation     |
//! | [`layout`] | `parse_layout`, `load_layout`, `random_layout`                |
//! | [`error`]  | `GridError`, `GridResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates serde derives to `gn-core` types.                 |

pub mod error;
pub mod grid;
pub mod layout;


pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use layout::{load_layout, parse_layout, random_layout};
