//! Port interface for the metrics backend
//!
//! This trait defines the boundary between the view and the infrastructure
//! that actually talks to the backend.

use async_trait::async_trait;
use driftradar_domain::{MetricRecord, Result};

/// Source of the full metric record collection
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetch every metric record the backend currently holds.
    ///
    /// A single call issues at most one request; implementations must not
    /// retry.
    async fn fetch_metrics(&self) -> Result<Vec<MetricRecord>>;
}
