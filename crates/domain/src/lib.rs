//! # ventcast-domain
//!
//! Pure domain model for deciding when to open or close a window.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, forecast queries
//! - Define the **Series** of forecast temperature readings
//! - Classify readings against a threshold (**Sign**)
//! - Detect threshold **crossings**, resolving runs of exact-zero readings
//! - Map crossings to window **actions** for a cooling or heating bound
//! - Merge the upper and lower bound watches into one chronological **schedule**
//! - Estimate the window's assumed starting state
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod query;
pub mod time;

pub mod action;
pub mod band;
pub mod crossing;
pub mod initial_state;
pub mod plan;
pub mod reading;
pub mod schedule;
pub mod sign;
