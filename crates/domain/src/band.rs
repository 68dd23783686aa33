//! Comfort band — the validated `[min, max]` temperature interval.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default lower comfort bound in degrees Celsius.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 17.0;
/// Default upper comfort bound in degrees Celsius.
pub const DEFAULT_MAX_TEMPERATURE: f64 = 21.0;

/// Temperature interval the schedule aims to keep the room within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComfortBand {
    min_temperature: f64,
    max_temperature: f64,
}

impl ComfortBand {
    /// Create a band, rejecting non-finite bounds and `min > max`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteThreshold`] or
    /// [`ValidationError::InvertedBand`].
    pub fn new(min_temperature: f64, max_temperature: f64) -> Result<Self, ValidationError> {
        for value in [min_temperature, max_temperature] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteThreshold { value });
            }
        }
        if min_temperature > max_temperature {
            return Err(ValidationError::InvertedBand {
                min: min_temperature,
                max: max_temperature,
            });
        }
        Ok(Self {
            min_temperature,
            max_temperature,
        })
    }

    #[must_use]
    pub fn min_temperature(&self) -> f64 {
        self.min_temperature
    }

    #[must_use]
    pub fn max_temperature(&self) -> f64 {
        self.max_temperature
    }
}

impl Default for ComfortBand {
    fn default() -> Self {
        Self {
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            max_temperature: DEFAULT_MAX_TEMPERATURE,
        }
    }
}

#[derive(Deserialize)]
struct RawBand {
    min_temperature: f64,
    max_temperature: f64,
}

impl<'de> Deserialize<'de> for ComfortBand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBand::deserialize(deserializer)?;
        Self::new(raw.min_temperature, raw.max_temperature).map_err(serde::de::Error::custom)
    }
}
