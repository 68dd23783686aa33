//! Bright Sky adapter error types.

use ventcast_domain::error::{ValidationError, VentcastError};

/// Errors specific to fetching and decoding Bright Sky responses.
#[derive(Debug, thiserror::Error)]
pub enum BrightSkyError {
    /// The request could not be sent or the body could not be read.
    #[error("weather request failed")]
    Network(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("weather endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The body is not the expected JSON document.
    #[error("malformed weather response")]
    MalformedResponse(#[source] serde_json::Error),

    /// A record has no usable temperature.
    #[error("weather record at {timestamp} has no temperature")]
    MissingTemperature { timestamp: String },

    /// A record timestamp is not ISO-8601.
    #[error("invalid timestamp {value:?}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The decoded readings violate series invariants.
    #[error("invalid weather series")]
    Domain(#[source] ValidationError),
}

impl BrightSkyError {
    /// Convert into a [`VentcastError`] for propagation across port
    /// boundaries.
    pub fn into_domain(self) -> VentcastError {
        match self {
            Self::Domain(err) => VentcastError::Validation(err),
            other => VentcastError::Source(Box::new(other)),
        }
    }
}

impl From<BrightSkyError> for VentcastError {
    fn from(err: BrightSkyError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = BrightSkyError::Status { status: 404 };
        assert_eq!(err.to_string(), "weather endpoint returned HTTP 404");
    }

    #[test]
    fn should_convert_status_to_source_error() {
        let err: VentcastError = BrightSkyError::Status { status: 500 }.into();
        assert!(matches!(err, VentcastError::Source(_)));
    }

    #[test]
    fn should_convert_domain_error_back_to_validation() {
        let inner = ValidationError::NonFiniteThreshold { value: f64::INFINITY };
        let back: VentcastError = BrightSkyError::Domain(inner).into();
        assert!(matches!(back, VentcastError::Validation(_)));
    }

    #[test]
    fn should_display_malformed_response_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = BrightSkyError::MalformedResponse(json_err);
        assert_eq!(err.to_string(), "malformed weather response");
    }
}
