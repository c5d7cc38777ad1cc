//! Run configuration: signal timing, tick limit, strategy, replan policy.
//!
//! Every field has a default, so a JSON config only needs the keys it
//! changes:
//!
//! ```json
//! { "algorithm": "A*", "red_duration": 5, "replan": { "enabled": false } }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use gn_core::Tick;
use gn_search::Algorithm;

use crate::{SimError, SimResult};

// ── ReplanPolicy ──────────────────────────────────────────────────────────────

/// When and where a dynamic obstacle may be injected ahead of the vehicle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplanPolicy {
    pub enabled: bool,

    /// The vehicle must be at least this far along its path.  Default: 4.
    pub min_progress: usize,

    /// The candidate cell is this many steps ahead of the vehicle, and at
    /// least this many steps must remain.  Default: 3.  Must be ≥ 1.
    pub lookahead_offset: usize,
}

impl Default for ReplanPolicy {
    fn default() -> Self {
        Self {
            enabled:          true,
            min_progress:     4,
            lookahead_offset: 3,
        }
    }
}

impl ReplanPolicy {
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Strategy used for the initial plan and for replanning.  Default: BFS.
    pub algorithm: Algorithm,

    /// Red phase length in ticks.  Default: 3.
    pub red_duration: u64,

    /// Green phase length in ticks.  Default: 3.
    pub green_duration: u64,

    /// Upper bound for [`Simulation::run`][crate::Simulation::run].
    /// Default: 200.
    pub total_ticks: u64,

    /// Move budget for the greedy strategy.  `None` uses the grid's cell
    /// count; smaller values are raised to it.
    pub greedy_step_budget: Option<usize>,

    pub replan: ReplanPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            algorithm:          Algorithm::Bfs,
            red_duration:       3,
            green_duration:     3,
            total_ticks:        200,
            greedy_step_budget: None,
            replan:             ReplanPolicy::default(),
        }
    }
}

impl SimConfig {
    /// The tick at which [`run`][crate::Simulation::run] stops (exclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Parse a JSON config and validate it.
    pub fn from_json_reader<R: Read>(reader: R) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Open `path` and parse it with [`from_json_reader`][Self::from_json_reader].
    pub fn from_json_path(path: &Path) -> SimResult<Self> {
        debug!("loading config from {}", path.display());
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be at least 1".into()));
        }
        if self.replan.lookahead_offset == 0 {
            return Err(SimError::Config(
                "replan.lookahead_offset must be at least 1".into(),
            ));
        }
        if self.red_duration.checked_add(self.green_duration).is_none() {
            return Err(SimError::Config(format!(
                "signal cycle {} + {} overflows u64",
                self.red_duration, self.green_duration
            )));
        }
        Ok(())
    }
}
