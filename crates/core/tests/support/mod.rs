//! Shared fixtures for core integration tests

#![allow(dead_code)]

pub mod sources;

use chrono::{DateTime, TimeZone, Utc};
use driftradar_domain::{MetricRecord, RecordId};

/// Fixed base instant so timestamp ordering in tests is deterministic.
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap() + chrono::Duration::minutes(minutes)
}

pub fn metric(
    id: i64,
    batch_id: i64,
    feature: &str,
    metric_type: &str,
    score: f64,
    timestamp: DateTime<Utc>,
) -> MetricRecord {
    MetricRecord {
        id: RecordId::Int(id),
        batch_id,
        timestamp,
        feature_name: feature.to_string(),
        metric_type: metric_type.to_string(),
        drift_score: score,
        is_drifted: false,
        alert_message: None,
    }
}

pub fn drifted(mut record: MetricRecord, message: &str) -> MetricRecord {
    record.is_drifted = true;
    record.alert_message = Some(message.to_string());
    record
}

/// The three-record scenario: two MonthlyCharges batches and one Contract
/// batch, the second MonthlyCharges batch drifted.
pub fn scenario_records() -> Vec<MetricRecord> {
    vec![
        metric(1, 1, "MonthlyCharges", "data_drift_psi_num", 0.12, at(0)),
        drifted(
            metric(2, 2, "MonthlyCharges", "data_drift_psi_num", 0.31, at(30)),
            "drift detected",
        ),
        metric(3, 1, "Contract", "data_drift_psi_cat", 0.05, at(0)),
    ]
}
