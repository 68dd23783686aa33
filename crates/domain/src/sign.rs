//! Sign of a reading relative to a threshold.

use serde::{Deserialize, Serialize};

/// Position of a shifted reading relative to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classify an already shifted value against zero.
    #[must_use]
    pub fn of(value: f64) -> Self {
        classify(value, 0.0)
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }
}

/// Which side of the threshold a crossing moves into.
///
/// A crossing never ends on the threshold itself, so there is no zero
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

/// Classify `value` against `threshold`.
///
/// Equivalent to `Sign::of(value - threshold)`.
#[must_use]
pub fn classify(value: f64, threshold: f64) -> Sign {
    if value > threshold {
        Sign::Positive
    } else if value < threshold {
        Sign::Negative
    } else {
        Sign::Zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_above_threshold_as_positive() {
        assert_eq!(classify(21.5, 21.0), Sign::Positive);
    }

    #[test]
    fn should_classify_equal_value_as_zero() {
        assert_eq!(classify(17.0, 17.0), Sign::Zero);
        assert!(classify(17.0, 17.0).is_zero());
    }

    #[test]
    fn should_classify_below_threshold_as_negative() {
        assert_eq!(classify(16.9, 17.0), Sign::Negative);
    }

    #[test]
    fn should_match_pre_shifted_classification() {
        let threshold = 19.25;
        for value in [15.0, 19.0, 19.25, 19.5, 30.0] {
            assert_eq!(classify(value, threshold), Sign::of(value - threshold));
        }
    }

    #[test]
    fn should_treat_negative_zero_as_zero() {
        assert_eq!(Sign::of(-0.0), Sign::Zero);
    }
}
