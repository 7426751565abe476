//! Declarative chart series descriptors

use serde::{Deserialize, Serialize};

/// One line on the drift chart: which records feed it and how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub feature_name: String,
    pub metric_type: String,
    pub label: String,
    /// Any CSS color; used verbatim by the HTML renderer.
    pub color: String,
}

impl SeriesDescriptor {
    pub fn new(
        feature_name: impl Into<String>,
        metric_type: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            feature_name: feature_name.into(),
            metric_type: metric_type.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}
