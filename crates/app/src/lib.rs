//! # DriftRadar App
//!
//! Command-line dashboard - CLI, wiring and renderers.
//!
//! This crate contains:
//! - Command-line parsing and configuration overrides
//! - Application context (dependency wiring and the run cycle)
//! - Terminal, HTML and JSON renderers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Renderers are pure functions of the view state

pub mod cli;
pub mod context;
pub mod render;

pub use cli::Cli;
pub use context::{AppContext, RunOutcome};
