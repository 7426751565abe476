//! # DriftRadar Domain
//!
//! Business domain types and models for the DriftRadar dashboard.
//!
//! This crate contains:
//! - Metric records as produced by the drift monitoring backend
//! - Declarative chart series descriptors
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other DriftRadar crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
