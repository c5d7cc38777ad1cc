//! `TrafficSignal` and its phase.

use std::fmt;

use gn_core::{Position, Tick};

/// The two phases of the signal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalPhase {
    Red,
    Green,
}

impl SignalPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SignalPhase::Red   => "red",
            SignalPhase::Green => "green",
        }
    }
}

impl fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-cycle red/green signal bound to at most one grid cell.
///
/// Created once per grid configuration.  When the signal cell moves, call
/// [`set_position`][Self::set_position]; the tick counter carries on.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficSignal {
    position:       Option<Position>,
    red_duration:   u64,
    green_duration: u64,
    tick:           Tick,
}

impl TrafficSignal {
    pub fn new(position: Option<Position>, red_duration: u64, green_duration: u64) -> Self {
        Self {
            position,
            red_duration,
            green_duration,
            tick: Tick::ZERO,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn red_duration(&self) -> u64 {
        self.red_duration
    }

    pub fn green_duration(&self) -> u64 {
        self.green_duration
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// `red_duration + green_duration`, saturating at `u64::MAX`.
    #[inline]
    pub fn cycle_len(&self) -> u64 {
        self.red_duration.saturating_add(self.green_duration)
    }

    // ── Timing ────────────────────────────────────────────────────────────

    /// Step the counter by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.tick = self.tick.offset(1);
    }

    /// `true` during the first `red_duration` ticks of each cycle.
    /// A zero-length cycle is never red.
    #[inline]
    pub fn is_red(&self) -> bool {
        self.cycle_len() > 0 && self.tick.phase_in(self.cycle_len()) < self.red_duration
    }

    pub fn phase(&self) -> SignalPhase {
        if self.is_red() { SignalPhase::Red } else { SignalPhase::Green }
    }

    /// Ticks until the phase flips, counting the current one.
    ///
    /// `None` if the phase never changes (one of the durations is zero).
    pub fn ticks_until_change(&self) -> Option<u64> {
        if self.red_duration == 0 || self.green_duration == 0 {
            return None;
        }
        let t = self.tick.phase_in(self.cycle_len());
        Some(if t < self.red_duration {
            self.red_duration - t
        } else {
            self.cycle_len() - t
        })
    }

    /// `true` if a vehicle on `cell` must wait this tick.
    pub fn holds(&self, cell: Position) -> bool {
        self.position == Some(cell) && self.is_red()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move (or remove) the signal.  The tick counter is not reset.
    pub fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
}

impl fmt::Display for TrafficSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(f, "signal@{p} {} ({})", self.phase(), self.tick),
            None    => write!(f, "signal@none {} ({})", self.phase(), self.tick),
        }
    }
}
