//! # DriftRadar Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP client
//! - The metrics backend client (`GET /metrics`)
//! - Configuration loading (file + environment)
//! - Logging setup
//!
//! ## Architecture
//! - Implements traits defined in `driftradar-core`
//! - Depends on `driftradar-domain` and `driftradar-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{MetricsApiClient, MetricsApiConfig};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
