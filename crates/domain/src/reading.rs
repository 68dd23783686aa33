//! Forecast readings and the ordered series they form.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::Timestamp;

/// One forecast temperature at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: Timestamp,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
}

impl Reading {
    #[must_use]
    pub fn new(timestamp: Timestamp, temperature: f64) -> Self {
        Self {
            timestamp,
            temperature,
        }
    }
}

/// A finite sequence of readings with strictly increasing timestamps.
///
/// Ordering is defined solely by timestamp comparison; the position of a
/// reading doubles as its lookup key for crossing detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Reading>", into = "Vec<Reading>")]
pub struct Series {
    readings: Vec<Reading>,
}

impl Series {
    /// Build a series, validating finiteness and timestamp order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteTemperature`] for NaN or infinite
    /// temperatures and [`ValidationError::UnorderedReadings`] when a
    /// timestamp does not strictly follow its predecessor.
    pub fn new(readings: Vec<Reading>) -> Result<Self, ValidationError> {
        for reading in &readings {
            if !reading.temperature.is_finite() {
                return Err(ValidationError::NonFiniteTemperature {
                    timestamp: reading.timestamp,
                });
            }
        }
        for pair in readings.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(ValidationError::UnorderedReadings {
                    timestamp: pair[1].timestamp,
                });
            }
        }
        Ok(Self { readings })
    }

    /// A series with no readings.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Reading> {
        self.readings.first()
    }

    /// Arithmetic mean of all temperatures, `None` for an empty series.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        if self.readings.is_empty() {
            return None;
        }
        let sum: f64 = self.readings.iter().map(|r| r.temperature).sum();
        Some(sum / self.readings.len() as f64)
    }

    /// Temperatures relative to `threshold`, paired with their timestamps.
    pub fn shifted(&self, threshold: f64) -> impl Iterator<Item = (Timestamp, f64)> + '_ {
        self.readings
            .iter()
            .map(move |r| (r.timestamp, r.temperature - threshold))
    }
}

impl TryFrom<Vec<Reading>> for Series {
    type Error = ValidationError;

    fn try_from(readings: Vec<Reading>) -> Result<Self, Self::Error> {
        Self::new(readings)
    }
}

impl From<Series> for Vec<Reading> {
    fn from(series: Series) -> Self {
        series.readings
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
