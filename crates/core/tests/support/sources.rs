//! In-memory `MetricsSource` mocks

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use driftradar_core::MetricsSource;
use driftradar_domain::{MetricRecord, Result};
use tokio::sync::Notify;

/// Returns a fixed outcome and counts calls.
#[derive(Clone)]
pub struct FixedSource {
    outcome: Result<Vec<MetricRecord>>,
    calls: Arc<AtomicUsize>,
}

impl FixedSource {
    pub fn new(outcome: Result<Vec<MetricRecord>>) -> Self {
        Self { outcome, calls: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricsSource for FixedSource {
    async fn fetch_metrics(&self) -> Result<Vec<MetricRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Blocks inside `fetch_metrics` until released, so tests can act while a
/// fetch is in flight.
pub struct GatedSource {
    records: Vec<MetricRecord>,
    called: Notify,
    release: Notify,
}

impl GatedSource {
    pub fn new(records: Vec<MetricRecord>) -> Self {
        Self { records, called: Notify::new(), release: Notify::new() }
    }

    pub async fn wait_until_called(&self) {
        self.called.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl MetricsSource for GatedSource {
    async fn fetch_metrics(&self) -> Result<Vec<MetricRecord>> {
        self.called.notify_one();
        self.release.notified().await;
        Ok(self.records.clone())
    }
}
