//! Read-only projections of a metric record set
//!
//! Everything here is a pure function of its input: calling it twice on the
//! same records yields identical output.

pub mod alerts;
pub mod chart;
pub mod dashboard;

pub use alerts::derive_alerts;
pub use chart::{batch_labels, derive_chart_series, derive_series, ChartData, ChartSeries};
pub use dashboard::Dashboard;
