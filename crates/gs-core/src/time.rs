//! Simulation time model.
//!
//! Arrivals happen on whole-minute boundaries, so the canonical clock is an
//! integer `Tick` (1 tick = 1 simulated minute).  Projections such as a
//! register's completion time can land between ticks and are reported as
//! `f64` minutes.

use std::fmt;

/// An absolute simulation time in minutes since the store opened.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, or `None` if `earlier` is later.
    #[inline]
    pub fn checked_since(self, earlier: Tick) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }

    /// This tick as fractional minutes.
    #[inline]
    pub fn as_minutes(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
