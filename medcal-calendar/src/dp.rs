//! # Density-Independent Pixels (Dp)
//!
//! Picker layouts are described in dp so that the scroll offsets computed by
//! [`crate::picker_position`] stay independent of the display density. The
//! host converts the final offset to physical pixels with its own scale
//! factor; the engine never reads one.

use std::ops::{Mul, Sub};

/// Density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// A length of zero.
    pub const ZERO: Dp = Dp(0.0);

    /// Returns the larger of the two values.
    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<usize> for Dp {
    type Output = Dp;

    fn mul(self, rhs: usize) -> Dp {
        Dp(self.0 * rhs as f64)
    }
}
