//! Vehicle traversal along the current path.
//!
//! The state is implicit in `(path, path_index)`: [`Traversal::of`] reads it
//! back, [`advance`] performs the one transition allowed per step.

use std::fmt;

use gn_signal::TrafficSignal;

use crate::PlannerState;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Traversal {
    /// No path: the vehicle sits at the start cell (or the origin).
    NoPath,
    /// On the first cell of the path, not yet moved.
    AtStart,
    /// Moved one cell this step.
    Advancing,
    /// On the signal cell while it is red.
    HeldAtSignal,
    /// On the last cell of the path.  For an incomplete greedy walk this is
    /// where the walk stopped, not the goal.
    Arrived,
}

impl Traversal {
    /// Classify a planner state without stepping it.
    pub fn of(state: &PlannerState) -> Self {
        if state.path.is_empty() {
            Traversal::NoPath
        } else if state.at_end() {
            Traversal::Arrived
        } else if state.path_index == 0 {
            Traversal::AtStart
        } else {
            Traversal::Advancing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Traversal::NoPath       => "no_path",
            Traversal::AtStart      => "at_start",
            Traversal::Advancing    => "advancing",
            Traversal::HeldAtSignal => "held_at_signal",
            Traversal::Arrived      => "arrived",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Perform this step's transition.  Never touches the signal.
pub fn advance(state: &mut PlannerState, signal: &TrafficSignal) -> Traversal {
    let Some(cell) = state.current_cell() else {
        return Traversal::NoPath;
    };
    if signal.holds(cell) {
        return Traversal::HeldAtSignal;
    }
    if state.at_end() {
        return Traversal::Arrived;
    }
    state.path_index += 1;
    Traversal::Advancing
}
