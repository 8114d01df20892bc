//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! rendered frame; the core never reads a wall clock.  The host's scheduler
//! decides how often `tick()` runs, and every per-tick quantity (speed, decay,
//! food lifetime) is expressed per tick so the simulation is deterministic
//! regardless of frame-rate jitter.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 60 ticks/second a u64 lasts ~9.7 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
