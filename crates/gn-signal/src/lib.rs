//! `gn-signal` — the single periodic traffic signal.
//!
//! # Timing model
//!
//! The signal is a pure function of its tick counter:
//!
//! ```text
//! cycle  = red_duration + green_duration
//! is_red = cycle > 0 && (tick mod cycle) < red_duration
//! ```
//!
//! Every cycle starts red at tick 0.  The simulation calls
//! [`TrafficSignal::advance`] exactly once per step, after the traversal
//! transition, so a vehicle standing on the signal cell at tick `t` sees the
//! phase of tick `t`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the public types.       |

pub mod signal;

#[cfg(test)]
mod tests;

pub use signal::{SignalPhase, TrafficSignal};
