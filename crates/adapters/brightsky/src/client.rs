//! HTTP client implementing the [`WeatherSource`] port.

use std::future::Future;

use ventcast_app::ports::WeatherSource;
use ventcast_domain::error::VentcastError;
use ventcast_domain::query::ForecastQuery;
use ventcast_domain::reading::Series;

use crate::config::BrightSkyConfig;
use crate::error::BrightSkyError;
use crate::response::parse_series;

/// Bright Sky weather source backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct BrightSkyClient {
    http: reqwest::Client,
    config: BrightSkyConfig,
}

impl BrightSkyClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BrightSkyError::Network`] if the HTTP client cannot be
    /// initialised (e.g. TLS backend failure).
    pub fn new(config: BrightSkyConfig) -> Result<Self, BrightSkyError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(BrightSkyError::Network)?;
        Ok(Self { http, config })
    }

    /// Build the GET request for `query` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`BrightSkyError::Network`] if the configured URL is invalid.
    pub fn request(&self, query: &ForecastQuery) -> Result<reqwest::Request, BrightSkyError> {
        self.http
            .get(&self.config.url)
            .query(&[
                ("date", query.date.to_string()),
                ("lat", query.latitude.to_string()),
                ("lon", query.longitude.to_string()),
            ])
            .build()
            .map_err(BrightSkyError::Network)
    }

    /// Fetch and decode the series for `query`.
    ///
    /// # Errors
    ///
    /// Returns a network, status, or decoding [`BrightSkyError`].
    #[tracing::instrument(skip(self), fields(url = %self.config.url))]
    pub async fn fetch(&self, query: &ForecastQuery) -> Result<Series, BrightSkyError> {
        let request = self.request(query)?;
        tracing::debug!(url = %request.url(), "requesting forecast");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(BrightSkyError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(BrightSkyError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(BrightSkyError::Network)?;
        let series = parse_series(&body)?;
        tracing::debug!(readings = series.len(), "forecast decoded");
        Ok(series)
    }
}

impl WeatherSource for BrightSkyClient {
    fn fetch_series(
        &self,
        query: &ForecastQuery,
    ) -> impl Future<Output = Result<Series, VentcastError>> + Send {
        let query = *query;
        async move { self.fetch(&query).await.map_err(BrightSkyError::into_domain) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query() -> ForecastQuery {
        ForecastQuery::new(NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(), 52.52, 13.4)
    }

    #[test]
    fn should_build_get_request_with_query_parameters() {
        let client = BrightSkyClient::new(BrightSkyConfig::default()).unwrap();
        let request = client.request(&query()).unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.brightsky.dev/weather?date=2024-07-14&lat=52.52&lon=13.4"
        );
    }

    #[test]
    fn should_keep_negative_coordinates() {
        let client = BrightSkyClient::new(BrightSkyConfig::default()).unwrap();
        let q = ForecastQuery::new(query().date, -33.87, -151.21);
        let request = client.request(&q).unwrap();
        assert_eq!(
            request.url().query(),
            Some("date=2024-07-14&lat=-33.87&lon=-151.21")
        );
    }

    #[test]
    fn should_reject_invalid_url() {
        let config = BrightSkyConfig {
            url: "not a url".to_string(),
            ..BrightSkyConfig::default()
        };
        let client = BrightSkyClient::new(config).unwrap();
        let err = client.request(&query()).unwrap_err();
        assert!(matches!(err, BrightSkyError::Network(_)));
    }

    #[tokio::test]
    async fn should_report_network_error_as_source_error() {
        let config = BrightSkyConfig {
            url: "http://127.0.0.1:9/weather".to_string(),
            timeout_secs: 2,
            ..BrightSkyConfig::default()
        };
        let client = BrightSkyClient::new(config).unwrap();
        let result = client.fetch_series(&query()).await;
        assert!(matches!(result, Err(VentcastError::Source(_))));
    }
}
