//! HTTP implementation of the `MetricsSource` port

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use driftradar_core::MetricsSource;
use driftradar_domain::constants::{DEFAULT_API_BASE_URL, METRICS_PATH};
use driftradar_domain::{ApiConfig, DriftRadarError, MetricRecord, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Configuration for the metrics API client
#[derive(Debug, Clone)]
pub struct MetricsApiConfig {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Timeout for the whole request
    pub timeout: Duration,
    pub user_agent: Option<String>,
    /// Honour proxy environment variables
    pub system_proxy: bool,
}

impl Default for MetricsApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: None,
            system_proxy: true,
        }
    }
}

impl From<&ApiConfig> for MetricsApiConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
            system_proxy: config.use_system_proxy,
        }
    }
}

/// Client for the backend's read endpoint
pub struct MetricsApiClient {
    http_client: Arc<HttpClient>,
    config: MetricsApiConfig,
}

impl MetricsApiClient {
    /// Create a new metrics client
    ///
    /// # Errors
    ///
    /// Returns `DriftRadarError::Config` if the HTTP client cannot be built
    pub fn new(config: MetricsApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = HttpClient::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .system_proxy(config.system_proxy);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http_client = builder
            .build()
            .map_err(|e| DriftRadarError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client: Arc::new(http_client), config })
    }

    /// Absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Execute a GET request and decode a JSON body
    ///
    /// # Errors
    ///
    /// - `Network` for connection failures and timeouts
    /// - `Http` for any non-2xx status
    /// - `InvalidPayload` when the body does not decode into `T`
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url_for(path);

        debug!(url = %url, "GET request");

        let request = self.http_client.request(Method::GET, &url);
        let response = self.http_client.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, %status, "backend returned non-success status");
            return Err(DriftRadarError::Http(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| DriftRadarError::from(InfraError::from(e)))?;
        let decoded =
            serde_json::from_slice(&body).map_err(|e| DriftRadarError::from(InfraError::from(e)))?;

        info!(path = %path, bytes = body.len(), "GET request successful");
        Ok(decoded)
    }
}

#[async_trait]
impl MetricsSource for MetricsApiClient {
    async fn fetch_metrics(&self) -> Result<Vec<MetricRecord>> {
        self.get_json(METRICS_PATH).await
    }
}
