//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gn_core::Tick;
use gn_search::Path;
use gn_sim::{SimObserver, StepReport};

use crate::row::{PathCellRow, StepRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every step, and every new path, to an
/// [`OutputWriter`].
///
/// Errors from the writer are stored because `SimObserver` methods have no
/// return value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error].  `run_ticks` does not call
/// `on_sim_end`; call [`finish`][Self::finish] after it instead.
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    last_path:  Option<Path>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_path:  None,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, reporting any stored error first.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_step_end(&mut self, report: &StepReport) {
        let result = self.writer.write_step(&StepRow::from_report(report));
        self.store_err(result);

        if self.last_path.as_ref() != Some(&report.path) {
            if !report.path.is_empty() {
                let rows = PathCellRow::from_path(report.tick.0, &report.path);
                let result = self.writer.write_path(&rows);
                self.store_err(result);
            }
            self.last_path = Some(report.path.clone());
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
