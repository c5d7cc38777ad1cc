//! External edit commands, applied at the start of a step.

use std::fmt;

use gn_core::Position;
use gn_search::Algorithm;

/// An edit requested by whatever drives the simulation (UI, script, test).
///
/// Every applied command discards the current plan and replans from the
/// start cell with a fresh [`PlannerState`][crate::PlannerState].  Commands
/// naming a cell outside the grid are logged and ignored.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Flip Free ↔ Obstacle.  Start, Goal and Signal cells are left alone.
    ToggleObstacle(Position),
    /// Move the start cell here, overwriting whatever the cell held.
    PlaceStart(Position),
    /// Move the goal cell here, overwriting whatever the cell held.
    PlaceGoal(Position),
    /// Place the signal here, or remove it if it is already here.
    ToggleSignal(Position),
    SetAlgorithm(Algorithm),
    /// Restore the layout the simulation was built with.
    Reset,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ToggleObstacle(p) => write!(f, "toggle-obstacle {p}"),
            Command::PlaceStart(p)     => write!(f, "place-start {p}"),
            Command::PlaceGoal(p)      => write!(f, "place-goal {p}"),
            Command::ToggleSignal(p)   => write!(f, "toggle-signal {p}"),
            Command::SetAlgorithm(a)   => write!(f, "set-algorithm {a}"),
            Command::Reset             => f.write_str("reset"),
        }
    }
}
