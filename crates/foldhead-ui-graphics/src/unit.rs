//! Unit types: Dp and its arithmetic

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Density-independent length.
///
/// Header heights, title offsets and scroll deltas are all expressed in `Dp`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    pub fn min(self, other: Dp) -> Dp {
        Dp(self.0.min(other.0))
    }

    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }

    pub fn clamp(self, low: Dp, high: Dp) -> Dp {
        Dp(self.0.clamp(low.0, high.0))
    }

    pub fn abs(self) -> Dp {
        Dp(self.0.abs())
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl AddAssign for Dp {
    fn add_assign(&mut self, rhs: Dp) {
        self.0 += rhs.0;
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Dp(value)
    }
}
