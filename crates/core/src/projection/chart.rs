//! Chart series projection

use std::collections::{BTreeSet, HashMap};

use driftradar_domain::{MetricRecord, SeriesDescriptor};
use serde::Serialize;

/// Label axis plus one series per descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Distinct batch ids across all records, ascending.
    pub labels: Vec<i64>,
    pub series: Vec<ChartSeries>,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    #[serde(flatten)]
    pub descriptor: SeriesDescriptor,
    /// Scores of every matching record, ordered by batch id.
    pub scores: Vec<f64>,
    /// The same scores aligned to the label axis; `None` where a batch has no
    /// matching record. When a batch holds several matching records the last
    /// one in batch order wins.
    pub points: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn label(&self) -> &str {
        &self.descriptor.label
    }

    /// Number of label slots without a value.
    pub fn missing_points(&self) -> usize {
        self.points.iter().filter(|point| point.is_none()).count()
    }
}

/// Sorted, de-duplicated batch ids of the whole record set.
pub fn batch_labels(records: &[MetricRecord]) -> Vec<i64> {
    records.iter().map(|record| record.batch_id).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Project one descriptor onto the record set against a label axis.
pub fn derive_series(
    records: &[MetricRecord],
    descriptor: &SeriesDescriptor,
    labels: &[i64],
) -> ChartSeries {
    let mut matching: Vec<&MetricRecord> = records
        .iter()
        .filter(|record| record.matches(&descriptor.feature_name, &descriptor.metric_type))
        .collect();
    // stable: records sharing a batch keep their input order
    matching.sort_by_key(|record| record.batch_id);

    let scores = matching.iter().map(|record| record.drift_score).collect();

    let by_batch: HashMap<i64, f64> =
        matching.iter().map(|record| (record.batch_id, record.drift_score)).collect();
    let points = labels.iter().map(|batch_id| by_batch.get(batch_id).copied()).collect();

    ChartSeries { descriptor: descriptor.clone(), scores, points }
}

/// Build the label axis and every configured series.
pub fn derive_chart_series(records: &[MetricRecord], descriptors: &[SeriesDescriptor]) -> ChartData {
    let labels = batch_labels(records);
    let series =
        descriptors.iter().map(|descriptor| derive_series(records, descriptor, &labels)).collect();
    ChartData { labels, series }
}
