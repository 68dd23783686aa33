//! Bright Sky client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Public Bright Sky weather endpoint.
pub const DEFAULT_URL: &str = "https://api.brightsky.dev/weather";

/// Configuration for the Bright Sky weather source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrightSkyConfig {
    /// Full URL of the `/weather` endpoint.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with each request.
    pub user_agent: String,
}

impl BrightSkyConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BrightSkyConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("ventcast/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = BrightSkyConfig::default();
        assert_eq!(config.url, "https://api.brightsky.dev/weather");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("ventcast/"));
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            url = "http://localhost:5000/weather"
            timeout_secs = 5
            user_agent = "test-agent"
        "#;
        let config: BrightSkyConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.url, "http://localhost:5000/weather");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: BrightSkyConfig = toml::from_str("timeout_secs = 10").unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_secs, 10);
    }
}
