//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

/// Decide when to open or close the window to stay within a comfort band.
#[derive(Debug, Parser)]
#[command(name = "ventcast", version)]
pub struct Cli {
    /// Latitude of the location
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the location
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,

    /// URL to fetch weather data from
    #[arg(long)]
    pub url: Option<String>,

    /// Day to plan for (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Lower comfort temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    pub min_temperature: Option<f64>,

    /// Upper comfort temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    pub max_temperature: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file (optional)
    #[arg(long, default_value = "ventcast.toml")]
    pub config: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn should_pass_clap_self_check() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_parse_positional_coordinates_with_defaults() {
        let cli = Cli::try_parse_from(["ventcast", "52.52", "13.4"]).unwrap();
        assert_eq!(cli.lat, 52.52);
        assert_eq!(cli.lon, 13.4);
        assert_eq!(cli.date, None);
        assert_eq!(cli.min_temperature, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.config, PathBuf::from("ventcast.toml"));
    }

    #[test]
    fn should_accept_negative_coordinates() {
        let cli = Cli::try_parse_from(["ventcast", "-33.87", "-151.21"]).unwrap();
        assert_eq!(cli.lat, -33.87);
        assert_eq!(cli.lon, -151.21);
    }

    #[test]
    fn should_parse_all_options() {
        let cli = Cli::try_parse_from([
            "ventcast",
            "--url",
            "http://localhost/weather",
            "--date",
            "2024-07-14",
            "--min-temperature",
            "16.5",
            "--max-temperature",
            "22",
            "--format",
            "json",
            "48.1",
            "11.6",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://localhost/weather"));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 7, 14));
        assert_eq!(cli.min_temperature, Some(16.5));
        assert_eq!(cli.max_temperature, Some(22.0));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn should_reject_invalid_date() {
        assert!(Cli::try_parse_from(["ventcast", "--date", "14.07.2024", "1", "2"]).is_err());
    }

    #[test]
    fn should_require_both_coordinates() {
        assert!(Cli::try_parse_from(["ventcast", "52.52"]).is_err());
    }
}
