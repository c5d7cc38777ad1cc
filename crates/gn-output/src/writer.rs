//! The `OutputWriter` trait implemented by trace backends.

use crate::{OutputResult, PathCellRow, StepRow};

/// A sink for step rows and path cells.
///
/// Errors are returned to the caller; [`TraceObserver`][crate::TraceObserver]
/// keeps the first one for [`take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write one step row.
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()>;

    /// Write the cells of one path, in order.
    fn write_path(&mut self, rows: &[PathCellRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
