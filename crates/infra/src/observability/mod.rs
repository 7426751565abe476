//! Observability infrastructure
//!
//! Diagnostics go through `tracing`; this module installs the subscriber
//! that formats them. Output is written to stderr so stdout stays free for
//! the rendered dashboard.

pub mod logging;

pub use logging::{build_filter, init};
