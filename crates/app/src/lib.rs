//! # ventcast-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `WeatherSource` — fetch the forecast series for one day and location
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PlanService` — fetch a series and compute the window plan
//! - Orchestrate domain functions without knowing *how* data is fetched
//!
//! ## Dependency rule
//! Depends on `ventcast-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
