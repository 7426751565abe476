//! Metrics backend client
//!
//! Reads the full metric record collection from the drift monitoring
//! backend. One call, one request: there is no retry, pagination or auth.

pub mod client;

pub use client::{MetricsApiClient, MetricsApiConfig};
