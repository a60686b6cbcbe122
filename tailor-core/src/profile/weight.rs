use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Preference weight clamped to [-1.0, 1.0].
/// Negative values express learned dislike, positive values learned interest.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Weight(f64);

impl Weight {
    /// Neutral weight — no learned signal either way.
    pub const NEUTRAL: f64 = 0.0;
    /// Strong interest threshold.
    pub const STRONG: f64 = 0.6;
    /// Strong dislike threshold.
    pub const AVERSE: f64 = -0.6;

    /// Create a new Weight, clamping to [-1.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(-1.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if the weight expresses strong interest.
    pub fn is_strong(self) -> bool {
        self.0 >= Self::STRONG
    }

    /// Positive part of the weight, used by the interest scorer.
    pub fn positive(self) -> f64 {
        self.0.max(0.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.3}", self.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> Self {
        w.0
    }
}

impl Add for Weight {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Weight {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for Weight {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(Weight::new(2.0).value(), 1.0);
        assert_eq!(Weight::new(-2.0).value(), -1.0);
        assert_eq!(Weight::new(0.5).value(), 0.5);
    }

    #[test]
    fn positive_part() {
        assert_eq!(Weight::new(-0.4).positive(), 0.0);
        assert_eq!(Weight::new(0.4).positive(), 0.4);
    }
}
