//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Backend collaborator
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const METRICS_PATH: &str = "/metrics";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BACKEND_LABEL: &str = "FastAPI backend";

// Presentation
pub const DASHBOARD_TITLE: &str = "DriftRadar Dashboard";
pub const CHART_TITLE: &str = "Data Drift Over Time";
pub const CHART_SECTION_TITLE: &str = "Data Drift Metrics";
pub const ALERTS_SECTION_TITLE: &str = "Recent Alerts";
pub const LOADING_MESSAGE: &str = "Loading metrics...";
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Metric type tags emitted by the backend
pub const METRIC_PSI_NUMERIC: &str = "data_drift_psi_num";
pub const METRIC_PSI_CATEGORICAL: &str = "data_drift_psi_cat";

/// Builds the single user-visible message shown for every fetch failure.
pub fn fetch_failure_message(backend_label: &str) -> String {
    format!("Failed to fetch data. Please ensure the {backend_label} is running.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_names_backend() {
        assert_eq!(
            fetch_failure_message(DEFAULT_BACKEND_LABEL),
            "Failed to fetch data. Please ensure the FastAPI backend is running."
        );
    }
}
