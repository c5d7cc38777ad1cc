//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `steps.csv`
//! - `paths.csv`
//!
//! Optional positions are written as two empty columns.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::debug;

use gn_core::Position;

use crate::writer::OutputWriter;
use crate::{OutputResult, PathCellRow, StepRow};

pub const STEPS_FILE: &str = "steps.csv";
pub const PATHS_FILE: &str = "paths.csv";

/// Writes a simulation trace to two CSV files.
pub struct CsvTraceWriter {
    steps:    Writer<File>,
    paths:    Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` must exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        debug!("writing trace to {}", dir.display());

        let mut steps = Writer::from_path(dir.join(STEPS_FILE))?;
        steps.write_record([
            "tick", "algorithm", "vehicle_row", "vehicle_col", "path_index", "path_len",
            "traversal", "signal_red", "replan", "candidate_row", "candidate_col",
            "obstacle_row", "obstacle_col", "commands_applied", "at_goal",
        ])?;

        let mut paths = Writer::from_path(dir.join(PATHS_FILE))?;
        paths.write_record(["tick", "seq", "row", "col"])?;

        Ok(Self {
            steps,
            paths,
            finished: false,
        })
    }
}

fn opt_cells(pos: Option<Position>) -> [String; 2] {
    match pos {
        Some(p) => [p.row.to_string(), p.col.to_string()],
        None    => [String::new(), String::new()],
    }
}

impl OutputWriter for CsvTraceWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        let [cand_r, cand_c] = opt_cells(row.replan_candidate);
        let [obs_r, obs_c]   = opt_cells(row.dynamic_obstacle);
        self.steps.write_record(&[
            row.tick.to_string(),
            row.algorithm.to_string(),
            row.vehicle.row.to_string(),
            row.vehicle.col.to_string(),
            row.path_index.to_string(),
            row.path_len.to_string(),
            row.traversal.to_string(),
            (row.signal_red as u8).to_string(),
            row.replan.to_string(),
            cand_r,
            cand_c,
            obs_r,
            obs_c,
            row.commands_applied.to_string(),
            (row.at_goal as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_path(&mut self, rows: &[PathCellRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record(&[
                row.tick.to_string(),
                row.seq.to_string(),
                row.cell.row.to_string(),
                row.cell.col.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.paths.flush()?;
        Ok(())
    }
}
