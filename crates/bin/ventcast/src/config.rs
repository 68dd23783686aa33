//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ventcast.toml` (or the `--config` path). Every field has a
//! sensible default so the file is optional. Precedence, highest first:
//! command-line flags, environment variables, file values, defaults.

use std::path::Path;

use serde::Deserialize;
use ventcast_adapter_brightsky::BrightSkyConfig;
use ventcast_domain::band::{ComfortBand, DEFAULT_MAX_TEMPERATURE, DEFAULT_MIN_TEMPERATURE};
use ventcast_domain::error::ValidationError;

use crate::cli::Cli;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Weather source settings.
    pub source: BrightSkyConfig,
    /// Comfort band settings.
    pub comfort: ComfortConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Comfort band bounds, validated into a [`ComfortBand`].
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ComfortConfig {
    pub min_temperature: f64,
    pub max_temperature: f64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Resolve the configuration for `cli`: file, then environment, then
    /// command-line overrides, then validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed, an override is
    /// not a number, or the result fails validation.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&cli.config)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.apply_cli_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("VENTCAST_URL") {
            self.source.url = val;
        }
        if let Some(val) = var("VENTCAST_MIN_TEMPERATURE") {
            self.comfort.min_temperature = parse_env("VENTCAST_MIN_TEMPERATURE", &val)?;
        }
        if let Some(val) = var("VENTCAST_MAX_TEMPERATURE") {
            self.comfort.max_temperature = parse_env("VENTCAST_MAX_TEMPERATURE", &val)?;
        }
        if let Some(val) = var("VENTCAST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(url) = &cli.url {
            self.source.url.clone_from(url);
        }
        if let Some(min) = cli.min_temperature {
            self.comfort.min_temperature = min;
        }
        if let Some(max) = cli.max_temperature {
            self.comfort.max_temperature = max;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.url.trim().is_empty() {
            return Err(ConfigError::Validation("source url must not be empty".to_string()));
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "source timeout must be non-zero".to_string(),
            ));
        }
        self.comfort.band()?;
        Ok(())
    }
}

impl ComfortConfig {
    /// Validate the bounds into a [`ComfortBand`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Band`] for non-finite or inverted bounds.
    pub fn band(&self) -> Result<ComfortBand, ConfigError> {
        Ok(ComfortBand::new(self.min_temperature, self.max_temperature)?)
    }
}

impl Default for ComfortConfig {
    fn default() -> Self {
        Self {
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            max_temperature: DEFAULT_MAX_TEMPERATURE,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ventcast=info,ventcast_app=info,ventcast_adapter_brightsky=info".to_string(),
        }
    }
}

fn parse_env(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse().map_err(|source| ConfigError::Env {
        key,
        value: value.to_string(),
        source,
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Environment override is not a number.
    #[error("{key}={value:?} is not a number")]
    Env {
        key: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    /// Comfort band rejected.
    #[error("invalid comfort band")]
    Band(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
