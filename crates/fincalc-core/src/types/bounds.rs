//! Closed clamping intervals for calculator inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper magnitude used for open-ended monetary fields.
pub const MONEY_LIMIT: f64 = 1e12;

/// A closed interval `[min, max]` that inputs are clamped into.
///
/// An unparsable value (`NaN`) is read as zero before clamping, the way an
/// empty numeric field reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Bounds {
    /// `[-1e12, 1e12]`, the range applied when a field names no tighter one.
    pub const DEFAULT: Bounds = Bounds::new(-MONEY_LIMIT, MONEY_LIMIT);

    /// `[0, 1e12]`, for balances, costs and contributions.
    pub const MONEY: Bounds = Bounds::new(0.0, MONEY_LIMIT);

    /// Creates a new interval.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the interval. `NaN` is treated as zero.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if value.is_nan() { 0.0 } else { value };
        value.max(self.min).min(self.max)
    }

    /// Returns true if `value` lies inside the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside() {
        let b = Bounds::new(1.0, 40.0);
        assert_eq!(b.clamp(5.0), 5.0);
    }

    #[test]
    fn test_clamp_edges() {
        let b = Bounds::new(1.0, 40.0);
        assert_eq!(b.clamp(0.0), 1.0);
        assert_eq!(b.clamp(99.0), 40.0);
        assert_eq!(b.clamp(f64::INFINITY), 40.0);
        assert_eq!(b.clamp(f64::NEG_INFINITY), 1.0);
    }

    #[test]
    fn test_nan_reads_as_zero() {
        assert_eq!(Bounds::MONEY.clamp(f64::NAN), 0.0);
        // zero itself is then clamped
        assert_eq!(Bounds::new(1.0, 24.0).clamp(f64::NAN), 1.0);
    }

    #[test]
    fn test_default_range() {
        let b = Bounds::default();
        assert_eq!(b.clamp(-5e12), -1e12);
        assert!(b.contains(0.0));
        assert!(!b.contains(2e12));
    }

    #[test]
    fn test_display() {
        assert_eq!(Bounds::new(0.0, 30.0).to_string(), "[0, 30]");
    }
}
