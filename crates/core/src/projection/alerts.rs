//! Alert list projection

use driftradar_domain::MetricRecord;

/// Drifted records, newest first.
///
/// The sort is stable, so alerts with equal timestamps keep their input
/// order.
pub fn derive_alerts(records: &[MetricRecord]) -> Vec<MetricRecord> {
    let mut alerts: Vec<MetricRecord> =
        records.iter().filter(|record| record.is_drifted).cloned().collect();
    alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    alerts
}
