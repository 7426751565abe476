//! Conversions from external infrastructure errors into domain errors.

use driftradar_domain::DriftRadarError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DriftRadarError);

impl From<InfraError> for DriftRadarError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DriftRadarError> for InfraError {
    fn from(value: DriftRadarError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDriftRadarError {
    fn into_driftradar(self) -> DriftRadarError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DriftRadarError */
/* -------------------------------------------------------------------------- */

impl IntoDriftRadarError for HttpError {
    fn into_driftradar(self) -> DriftRadarError {
        if self.is_timeout() {
            return DriftRadarError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DriftRadarError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return DriftRadarError::Http(status.as_u16());
        }

        if self.is_decode() {
            return DriftRadarError::InvalidPayload(self.to_string());
        }

        if self.is_builder() {
            return DriftRadarError::Config(format!("invalid HTTP request: {self}"));
        }

        DriftRadarError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_driftradar())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → DriftRadarError */
/* -------------------------------------------------------------------------- */

impl IntoDriftRadarError for JsonError {
    fn into_driftradar(self) -> DriftRadarError {
        DriftRadarError::InvalidPayload(format!(
            "{} at line {} column {}",
            self,
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_driftradar())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
