//! Forecast query — what the weather source is asked for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of forecast for one location.
///
/// Coordinates are passed through to the weather source unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastQuery {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
}

impl ForecastQuery {
    #[must_use]
    pub fn new(date: NaiveDate, latitude: f64, longitude: f64) -> Self {
        Self {
            date,
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for ForecastQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ ({}, {})", self.date, self.latitude, self.longitude)
    }
}
