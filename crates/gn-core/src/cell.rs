//! Cell classification shared by the grid, the planners, and layout files.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// What occupies a single grid cell.
///
/// `Start`, `Goal` and `Signal` are *unique* kinds: a grid holds at most one
/// cell of each, and placing one elsewhere relocates it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Open road (default state).
    #[default]
    Free,
    /// Static or dynamic blockage.
    Obstacle,
    /// Where the vehicle begins.
    Start,
    /// Where the vehicle is heading.
    Goal,
    /// The cell controlled by the traffic signal.
    Signal,
}

impl CellKind {
    /// `true` for every kind the vehicle may occupy.
    #[inline]
    pub fn is_traversable(self) -> bool {
        !matches!(self, CellKind::Obstacle)
    }

    /// `true` for kinds that may appear at most once per grid.
    #[inline]
    pub fn is_unique(self) -> bool {
        matches!(self, CellKind::Start | CellKind::Goal | CellKind::Signal)
    }

    /// Canonical single-character layout marker.
    pub fn marker(self) -> char {
        match self {
            CellKind::Free     => '0',
            CellKind::Obstacle => '1',
            CellKind::Start    => 'S',
            CellKind::Goal     => 'G',
            CellKind::Signal   => 'T',
        }
    }

    /// Human-readable label, useful for log lines and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Free     => "free",
            CellKind::Obstacle => "obstacle",
            CellKind::Start    => "start",
            CellKind::Goal     => "goal",
            CellKind::Signal   => "signal",
        }
    }
}

impl FromStr for CellKind {
    type Err = CoreError;

    /// Accepts `0`/`.` (free), `1`/`#` (obstacle), `S`, `G`, `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" | "." => Ok(CellKind::Free),
            "1" | "#" => Ok(CellKind::Obstacle),
            "S" | "s" => Ok(CellKind::Start),
            "G" | "g" => Ok(CellKind::Goal),
            "T" | "t" => Ok(CellKind::Signal),
            other => Err(CoreError::Parse(format!(
                "unknown cell marker {other:?}: expected one of 0 . 1 # S G T"
            ))),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
