//! Domain types and models

pub mod metric;
pub mod series;

pub use metric::{MetricRecord, RecordId};
pub use series::SeriesDescriptor;
