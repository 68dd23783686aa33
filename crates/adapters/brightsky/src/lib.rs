//! # ventcast-adapter-brightsky
//!
//! Weather source adapter for the [Bright Sky](https://brightsky.dev) API.
//!
//! ## Responsibilities
//! - Issue `GET <url>?date=…&lat=…&lon=…` against the `/weather` endpoint
//! - Decode the JSON `weather` record list
//! - Parse ISO-8601 timestamps and reject records without a temperature
//! - Hand a validated [`Series`](ventcast_domain::reading::Series) to the app layer
//!
//! ## Dependency rule
//! Depends on `ventcast-app` (port trait) and `ventcast-domain` (types).

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::BrightSkyClient;
pub use config::BrightSkyConfig;
pub use error::BrightSkyError;
pub use response::parse_series;
