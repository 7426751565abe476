//! Metric records produced by the drift monitoring backend
//!
//! One record is the outcome of one statistical test for one feature in one
//! ingestion batch. The dashboard never computes these; it only reads them.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque record identifier (the backend uses integer primary keys, but
/// nothing here depends on that).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A single drift measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub id: RecordId,
    pub batch_id: i64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub feature_name: String,
    pub metric_type: String,
    pub drift_score: f64,
    #[serde(default)]
    pub is_drifted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<String>,
}

impl MetricRecord {
    /// True when this record belongs to the given (feature, metric type) pair.
    pub fn matches(&self, feature_name: &str, metric_type: &str) -> bool {
        self.feature_name == feature_name && self.metric_type == metric_type
    }

    /// Alert text, treating an empty message as absent.
    pub fn alert_text(&self) -> Option<&str> {
        self.alert_message.as_deref().filter(|msg| !msg.is_empty())
    }
}

/// Accepts RFC 3339 timestamps and naive ISO-8601 date-times. The backend
/// stores naive UTC values, so those are read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid timestamp: {raw}"))
}
