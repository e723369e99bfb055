//! Bounded score value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quality or confidence score bounded to [0.0, 1.0]
///
/// Every numeric signal the pipeline produces (claim confidence, evidence
/// similarity, stage quality) is a `Score`, so out-of-range values cannot
/// leak into retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// The zero score
    pub const ZERO: Score = Score(0.0);

    /// The maximum score
    pub const MAX: Score = Score(1.0);

    /// Create a new score
    ///
    /// # Panics
    /// Panics if the value is outside [0.0, 1.0]
    ///
    /// # Examples
    ///
    /// ```
    /// use inquest_domain::Score;
    ///
    /// let score = Score::new(0.75);
    /// assert_eq!(score.value(), 0.75);
    /// ```
    pub fn new(value: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&value),
            "Score must be in [0, 1], got {}",
            value
        );
        Self(value)
    }

    /// Create a score, clamping the value into [0.0, 1.0]
    ///
    /// Used by heuristic computations whose intermediate sums may exceed
    /// the bounds before capping.
    pub fn clamped(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this score meets the given threshold
    pub fn meets(&self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: clamped scores always land in [0, 1]
        #[test]
        fn test_clamped_always_bounded(value: f64) {
            prop_assume!(!value.is_nan());
            let score = Score::clamped(value);
            prop_assert!(score.value() >= 0.0);
            prop_assert!(score.value() <= 1.0);
        }
    }
}
