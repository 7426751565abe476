//! # DriftRadar Core
//!
//! Pure dashboard logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The `MetricsSource` port the backend client implements
//! - Chart and alert projections derived from a metric record set
//! - The `MetricsView` load cycle and its explicit `ViewState`
//!
//! ## Architecture Principles
//! - Only depends on `driftradar-domain`
//! - No HTTP or rendering code
//! - All external dependencies via traits
//! - Projections are pure functions of the record set

pub mod projection;
pub mod view;

pub use projection::{
    batch_labels, derive_alerts, derive_chart_series, derive_series, ChartData, ChartSeries,
    Dashboard,
};
pub use view::ports::MetricsSource;
pub use view::{MetricsView, ViewState};
