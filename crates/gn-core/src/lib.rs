//! `gn-core` — foundational types for the `gridnav` route planner.
//!
//! This crate is a dependency of every other `gn-*` crate.  It has no `gn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`position`]   | `Position`, Manhattan distance, orthogonal offsets     |
//! | [`cell`]       | `CellKind` enum and its layout markers                 |
//! | [`time`]       | `Tick`                                                 |
//! | [`rng`]        | `LayoutRng` (seeded, deterministic)                    |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod position;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::CellKind;
pub use error::{CoreError, CoreResult};
pub use position::{ORTHOGONAL_OFFSETS, Position};
pub use rng::LayoutRng;
pub use time::Tick;
