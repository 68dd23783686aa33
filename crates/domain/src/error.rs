//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`VentcastError`] via `#[from]` or an explicit boxed source.

use crate::time::Timestamp;

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum VentcastError {
    /// Input rejected before any scheduling took place.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The weather source failed to deliver a usable series.
    #[error("weather source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected at the input boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A reading carries NaN or an infinite temperature.
    #[error("temperature at {timestamp} is not a finite number")]
    NonFiniteTemperature { timestamp: Timestamp },

    /// Timestamps must be strictly increasing.
    #[error("reading at {timestamp} is not after the previous reading")]
    UnorderedReadings { timestamp: Timestamp },

    /// A comfort band bound is NaN or infinite.
    #[error("threshold {value} is not a finite number")]
    NonFiniteThreshold { value: f64 },

    /// The lower bound lies above the upper bound.
    #[error("min temperature {min} is above max temperature {max}")]
    InvertedBand { min: f64, max: f64 },
}
