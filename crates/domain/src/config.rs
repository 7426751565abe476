//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_BACKEND_LABEL, METRIC_PSI_CATEGORICAL,
    METRIC_PSI_NUMERIC,
};
use crate::impl_domain_enum_conversions;
use crate::types::SeriesDescriptor;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Metrics backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend; `/metrics` is appended.
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
    /// Route requests through the proxy named by `HTTP(S)_PROXY`.
    pub use_system_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            user_agent: None,
            use_system_proxy: true,
        }
    }
}

/// What the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Name of the backend shown in the fetch-failure banner.
    pub backend_label: String,
    pub series: Vec<SeriesDescriptor>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { backend_label: DEFAULT_BACKEND_LABEL.to_string(), series: default_series() }
    }
}

/// The two series the dashboard plots out of the box.
pub fn default_series() -> Vec<SeriesDescriptor> {
    vec![
        SeriesDescriptor::new(
            "MonthlyCharges",
            METRIC_PSI_NUMERIC,
            "MonthlyCharges Drift Score",
            "rgb(255, 99, 132)",
        ),
        SeriesDescriptor::new(
            "Contract",
            METRIC_PSI_CATEGORICAL,
            "Contract Drift Score",
            "rgb(53, 162, 235)",
        ),
    ]
}

/// Rendered output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Destination file; stdout when unset.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl_domain_enum_conversions!(OutputFormat {
    Text => "text",
    Html => "html",
    Json => "json",
});

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: LogFormat::Pretty }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl_domain_enum_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_backend() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.dashboard.backend_label, "FastAPI backend");
        assert_eq!(config.dashboard.series.len(), 2);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.api.use_system_proxy);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "api": { "base_url": "http://metrics:9000" } }"#).unwrap();
        assert_eq!(config.api.base_url, "http://metrics:9000");
        assert_eq!(config.api.timeout_secs, DEFAULT_API_TIMEOUT_SECS);
        assert_eq!(config.dashboard.series, default_series());
        assert_eq!(config.logging.level, "warn");
    }
}
