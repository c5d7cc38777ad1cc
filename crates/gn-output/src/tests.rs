//! Tests for gn-output.

use std::path::Path;

use gn_grid::parse_layout;
use gn_sim::{SimBuilder, SimConfig, Simulation};

fn sim(text: &str) -> Simulation {
    let grid = parse_layout(text.as_bytes()).unwrap();
    SimBuilder::new(grid, SimConfig::default()).build().unwrap()
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = ::csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect();
    (header, rows)
}

const SIGNAL_ROW: &str = "S,0,T,0,G\n";

const OPEN_5X7: &str = "\
S,0,0,0,0,0,0
0,0,0,0,0,0,0
0,0,0,0,0,0,0
0,0,0,0,0,0,0
0,0,0,0,0,0,G
";

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::{PATHS_FILE, STEPS_FILE};
    use crate::{CsvTraceWriter, OutputWriter, TraceObserver};

    #[test]
    fn trace_has_one_row_per_step() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());
        let summary = sim(SIGNAL_ROW).run(&mut obs);
        assert!(obs.take_error().is_none());

        let (header, rows) = read_rows(&dir.path().join(STEPS_FILE));
        assert_eq!(header.len(), 15);
        assert_eq!(header[0], "tick");
        assert_eq!(rows.len() as u64, summary.steps);

        // tick, algorithm, vehicle_row, vehicle_col, path_index, path_len,
        // traversal, signal_red, replan, ...
        let held = &rows[2];
        assert_eq!(&held[..9], ["2", "BFS", "0", "2", "2", "5", "held_at_signal", "1", "idle"]);
        assert_eq!(&held[9..13], ["", "", "", ""]);
        assert_eq!(rows.last().unwrap()[6], "arrived");
        assert_eq!(rows.last().unwrap()[14], "1");
    }

    #[test]
    fn paths_written_once_per_distinct_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());
        sim(SIGNAL_ROW).run(&mut obs);

        let (header, rows) = read_rows(&dir.path().join(PATHS_FILE));
        assert_eq!(header, ["tick", "seq", "row", "col"]);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r[0] == "0"));
        assert_eq!(rows[4], ["0", "4", "0", "4"]);
    }

    #[test]
    fn committed_obstacle_appears_in_trace() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());
        sim(OPEN_5X7).run(&mut obs);
        assert!(obs.take_error().is_none());

        let (_, steps) = read_rows(&dir.path().join(STEPS_FILE));
        let commit = steps.iter().find(|r| r[8] == "committed").unwrap();
        assert_eq!(commit[0], "4");
        assert_eq!(commit[9..11], commit[11..13]);

        let (_, paths) = read_rows(&dir.path().join(PATHS_FILE));
        let mut ticks: Vec<&str> = paths.iter().map(|r| r[0].as_str()).collect();
        ticks.dedup();
        assert_eq!(ticks, ["0", "4"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvTraceWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CsvTraceWriter::new(&dir.path().join("absent")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use gn_sim::NoopObserver;

    use super::*;
    use crate::{OutputError, OutputResult, OutputWriter, PathCellRow, StepRow, TraceObserver};

    /// Keeps everything in memory; fails every step write after `fail_after`.
    #[derive(Default)]
    struct MemoryWriter {
        steps:      Vec<StepRow>,
        paths:      Vec<Vec<PathCellRow>>,
        finished:   usize,
        fail_after: Option<usize>,
    }

    impl OutputWriter for MemoryWriter {
        fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
            if self.fail_after.is_some_and(|n| self.steps.len() >= n) {
                return Err(OutputError::Io(io::Error::other(format!("full at {}", row.tick))));
            }
            self.steps.push(row.clone());
            Ok(())
        }
        fn write_path(&mut self, rows: &[PathCellRow]) -> OutputResult<()> {
            self.paths.push(rows.to_vec());
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn rows_mirror_reports() {
        let mut s = sim(SIGNAL_ROW);
        let report = s.step(&[]);
        let row = StepRow::from_report(&report);
        assert_eq!(row.tick, 0);
        assert_eq!(row.vehicle, report.vehicle);
        assert_eq!(row.path_len, 5);
        assert_eq!(row.traversal, "advancing");
        assert_eq!(row.replan_candidate, None);
        assert!(!row.at_goal);
    }

    #[test]
    fn run_finishes_writer() {
        let mut obs = TraceObserver::new(MemoryWriter::default());
        sim(SIGNAL_ROW).run(&mut obs);
        let w = obs.into_writer();
        assert_eq!(w.steps.len(), 6);
        assert_eq!(w.paths.len(), 1);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn run_ticks_needs_explicit_finish() {
        let mut obs = TraceObserver::new(MemoryWriter::default());
        sim(SIGNAL_ROW).run_ticks(3, &mut obs);
        obs.finish().unwrap();
        assert_eq!(obs.into_writer().finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let writer = MemoryWriter { fail_after: Some(2), ..MemoryWriter::default() };
        let mut obs = TraceObserver::new(writer);
        sim(SIGNAL_ROW).run(&mut obs);

        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: full at 2");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().steps.len(), 2);
    }

    #[test]
    fn finish_reports_stored_error() {
        let writer = MemoryWriter { fail_after: Some(0), ..MemoryWriter::default() };
        let mut obs = TraceObserver::new(writer);
        sim(SIGNAL_ROW).run_ticks(1, &mut obs);
        assert!(obs.finish().is_err());
        assert!(obs.finish().is_ok());
    }

    #[test]
    fn noop_run_matches_traced_run() {
        let mut traced = TraceObserver::new(MemoryWriter::default());
        let a = sim(OPEN_5X7).run(&mut traced);
        let b = sim(OPEN_5X7).run(&mut NoopObserver);
        assert_eq!(a, b);
        assert_eq!(traced.into_writer().steps.len() as u64, a.steps);
    }
}
