//! `gn-output` — step trace writers for the gridnav route planner.
//!
//! | Backend | Files created                  |
//! |---------|--------------------------------|
//! | CSV     | `steps.csv`, `paths.csv`       |
//!
//! `steps.csv` has one row per simulation step.  `paths.csv` lists the cells
//! of every distinct path the vehicle followed, keyed by the tick the path
//! was first reported at.
//!
//! Writers implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `gn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gn_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{PathCellRow, StepRow};
pub use writer::OutputWriter;
