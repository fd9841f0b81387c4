//! Frame counter.
//!
//! One frame is one unit of simulated time: the integrator applies
//! acceleration and velocity without a time-step factor.  Wall-clock time is
//! owned by the external driver and only feeds the FPS meter.

use std::fmt;

/// An absolute frame counter, advanced once per completed frame.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// The frame after `self`.
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }

    /// `true` when this frame falls on an `interval`-frame cadence.
    /// An interval of 0 is treated as 1.
    #[inline]
    pub fn on_cadence(self, interval: u64) -> bool {
        self.0 % interval.max(1) == 0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
