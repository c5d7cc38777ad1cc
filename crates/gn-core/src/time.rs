//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! simulation step: one pass of command handling, replanning, traversal and
//! signal advance.  Mapping ticks to frames or wall-clock time is the job of
//! whatever drives the loop; the core never sleeps.

use std::fmt;

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Position of this tick inside a repeating window of `cycle` ticks.
    ///
    /// Returns 0 for a zero-length cycle.
    #[inline]
    pub fn phase_in(self, cycle: u64) -> u64 {
        if cycle == 0 { 0 } else { self.0 % cycle }
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
