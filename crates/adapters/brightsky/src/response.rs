//! Bright Sky `/weather` response decoding.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use ventcast_domain::reading::{Reading, Series};

use crate::error::BrightSkyError;

/// Top-level body of a `/weather` response.
#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    pub weather: Vec<WeatherRecord>,
}

/// One hourly record. Only `timestamp` and `temperature` feed the planner;
/// the remaining columns are decoded for logging and future use.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRecord {
    pub timestamp: String,
    pub temperature: Option<f64>,
    pub source_id: Option<i64>,
    pub cloud_cover: Option<f64>,
    pub condition: Option<String>,
    pub dew_point: Option<f64>,
    pub icon: Option<String>,
    pub precipitation: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub sunshine: Option<f64>,
    pub visibility: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_gust_direction: Option<f64>,
    pub wind_gust_speed: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl WeatherRecord {
    /// Convert into a domain [`Reading`].
    ///
    /// # Errors
    ///
    /// Returns [`BrightSkyError::Timestamp`] for unparsable timestamps and
    /// [`BrightSkyError::MissingTemperature`] when the temperature is null.
    pub fn to_reading(&self) -> Result<Reading, BrightSkyError> {
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|source| BrightSkyError::Timestamp {
                value: self.timestamp.clone(),
                source,
            })?
            .with_timezone(&Utc);
        let temperature = self
            .temperature
            .ok_or_else(|| BrightSkyError::MissingTemperature {
                timestamp: self.timestamp.clone(),
            })?;
        Ok(Reading::new(timestamp, temperature))
    }
}

/// Decode a `/weather` response body into a validated series.
///
/// # Errors
///
/// Returns [`BrightSkyError::MalformedResponse`] when the body is not the
/// expected JSON, a per-record error from [`WeatherRecord::to_reading`], or
/// [`BrightSkyError::Domain`] when readings are out of order.
pub fn parse_series(body: &str) -> Result<Series, BrightSkyError> {
    let response: WeatherResponse =
        serde_json::from_str(body).map_err(BrightSkyError::MalformedResponse)?;
    let readings = response
        .weather
        .iter()
        .map(WeatherRecord::to_reading)
        .collect::<Result<Vec<_>, _>>()?;
    Series::new(readings).map_err(BrightSkyError::Domain)
}
