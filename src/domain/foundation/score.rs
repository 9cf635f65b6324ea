//! Score value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sub-score on the 0-100 scale.
///
/// Sub-scores are fractional; only the combined overall score is rounded
/// to a whole number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Full marks.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Score, clamping to the valid range.
    /// Non-finite inputs collapse to zero rather than poisoning comparisons.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 100.0))
        } else {
            Self::ZERO
        }
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounds to the nearest whole point.
    pub fn rounded(&self) -> u8 {
        self.0.round() as u8
    }

    /// True when the score falls below `threshold`.
    pub fn is_below(&self, threshold: f64) -> bool {
        self.0 < threshold
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
