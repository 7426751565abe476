//! Everything a renderer needs, in one value

use driftradar_domain::{MetricRecord, SeriesDescriptor};
use serde::Serialize;

use super::alerts::derive_alerts;
use super::chart::{derive_chart_series, ChartData};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub chart: ChartData,
    pub alerts: Vec<MetricRecord>,
}

impl Dashboard {
    pub fn from_records(records: &[MetricRecord], descriptors: &[SeriesDescriptor]) -> Self {
        Self { chart: derive_chart_series(records, descriptors), alerts: derive_alerts(records) }
    }
}
