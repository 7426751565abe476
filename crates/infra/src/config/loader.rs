//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults
//! 2. Overlay a config file (explicit path, or the first probed location)
//! 3. Overlay environment variables
//! 4. Validate the result
//!
//! ## Environment Variables
//! - `DRIFTRADAR_API_BASE_URL`: Backend base URL
//! - `DRIFTRADAR_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `DRIFTRADAR_API_SYSTEM_PROXY`: Honour `HTTP(S)_PROXY` (true/false)
//! - `DRIFTRADAR_BACKEND_LABEL`: Backend name shown in the failure banner
//! - `DRIFTRADAR_OUTPUT_FORMAT`: `text`, `html` or `json`
//! - `DRIFTRADAR_LOG_LEVEL`: Default log filter
//! - `DRIFTRADAR_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./driftradar.{toml,json}` or `./config.{toml,json}`
//! 2. The same names in the parent directory
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use driftradar_domain::{Config, DriftRadarError, LogFormat, OutputFormat, Result};

const FILE_NAMES: [&str; 4] = ["driftradar.toml", "driftradar.json", "config.toml", "config.json"];

/// Load configuration: defaults, then file, then environment.
///
/// When `path` is `None` and no file is found in the probed locations the
/// defaults are used.
///
/// # Errors
/// Returns `DriftRadarError::Config` if:
/// - An explicit file does not exist or cannot be parsed
/// - An environment variable has an invalid value
/// - The merged configuration fails [`validate`]
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let config = load_unvalidated(path)?;
    validate(&config)?;
    Ok(config)
}

/// Defaults, then file, then environment, without [`validate`].
///
/// For callers that layer further overrides (command-line flags) on top and
/// validate the final result themselves.
///
/// # Errors
/// Returns `DriftRadarError::Config` if an explicit file does not exist or
/// cannot be parsed, or an environment variable has an invalid value.
pub fn load_unvalidated(path: Option<PathBuf>) -> Result<Config> {
    let base = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(base)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing keys take their default values.
///
/// # Errors
/// Returns `DriftRadarError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DriftRadarError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DriftRadarError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DriftRadarError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DriftRadarError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DriftRadarError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DriftRadarError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Overlay environment variables onto `config`
///
/// Unset variables leave the corresponding value untouched.
///
/// # Errors
/// Returns `DriftRadarError::Config` if a variable is set to an unparsable
/// value.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(base_url) = env_var("DRIFTRADAR_API_BASE_URL") {
        config.api.base_url = base_url;
    }
    if let Some(timeout) = env_var("DRIFTRADAR_API_TIMEOUT_SECS") {
        config.api.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| DriftRadarError::Config(format!("Invalid API timeout: {}", e)))?;
    }
    if let Some(proxy) = env_bool("DRIFTRADAR_API_SYSTEM_PROXY") {
        config.api.use_system_proxy = proxy;
    }
    if let Some(label) = env_var("DRIFTRADAR_BACKEND_LABEL") {
        config.dashboard.backend_label = label;
    }
    if let Some(format) = env_var("DRIFTRADAR_OUTPUT_FORMAT") {
        config.output.format = format.parse::<OutputFormat>().map_err(DriftRadarError::Config)?;
    }
    if let Some(level) = env_var("DRIFTRADAR_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env_bool("DRIFTRADAR_LOG_JSON") {
        config.logging.format = if json { LogFormat::Json } else { LogFormat::Pretty };
    }
    Ok(config)
}

/// Check the merged configuration
///
/// # Errors
/// Returns `DriftRadarError::Config` naming the first offending value.
pub fn validate(config: &Config) -> Result<()> {
    let base_url = url::Url::parse(&config.api.base_url).map_err(|e| {
        DriftRadarError::Config(format!("Invalid API base URL '{}': {}", config.api.base_url, e))
    })?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(DriftRadarError::Config(format!(
            "API base URL must use http or https, got '{}'",
            base_url.scheme()
        )));
    }

    if config.api.timeout_secs == 0 {
        return Err(DriftRadarError::Config("API timeout must be greater than zero".to_string()));
    }

    for (index, series) in config.dashboard.series.iter().enumerate() {
        if series.feature_name.trim().is_empty()
            || series.metric_type.trim().is_empty()
            || series.label.trim().is_empty()
        {
            return Err(DriftRadarError::Config(format!(
                "Series #{} needs a feature name, metric type and label",
                index + 1
            )));
        }
    }

    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Read an environment variable, treating empty values as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// `None` if the variable is not set.
fn env_bool(key: &str) -> Option<bool> {
    env_var(key).map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use driftradar_domain::SeriesDescriptor;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::test_support::ENV_LOCK;

    const ENV_KEYS: [&str; 7] = [
        "DRIFTRADAR_API_BASE_URL",
        "DRIFTRADAR_API_TIMEOUT_SECS",
        "DRIFTRADAR_API_SYSTEM_PROXY",
        "DRIFTRADAR_BACKEND_LABEL",
        "DRIFTRADAR_OUTPUT_FORMAT",
        "DRIFTRADAR_LOG_LEVEL",
        "DRIFTRADAR_LOG_JSON",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("TEST_DRIFTRADAR_BOOL_ON", "ON");
        std::env::set_var("TEST_DRIFTRADAR_BOOL_OFF", "0");
        std::env::remove_var("TEST_DRIFTRADAR_BOOL_MISSING");

        assert_eq!(env_bool("TEST_DRIFTRADAR_BOOL_ON"), Some(true));
        assert_eq!(env_bool("TEST_DRIFTRADAR_BOOL_OFF"), Some(false));
        assert_eq!(env_bool("TEST_DRIFTRADAR_BOOL_MISSING"), None);

        std::env::remove_var("TEST_DRIFTRADAR_BOOL_ON");
        std::env::remove_var("TEST_DRIFTRADAR_BOOL_OFF");
    }

    #[test]
    fn test_env_overrides_apply() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("DRIFTRADAR_API_BASE_URL", "http://backend:8080");
        std::env::set_var("DRIFTRADAR_API_TIMEOUT_SECS", "4");
        std::env::set_var("DRIFTRADAR_BACKEND_LABEL", "drift API");
        std::env::set_var("DRIFTRADAR_OUTPUT_FORMAT", "HTML");
        std::env::set_var("DRIFTRADAR_LOG_JSON", "true");
        std::env::set_var("DRIFTRADAR_API_SYSTEM_PROXY", "off");

        let config = apply_env_overrides(Config::default()).unwrap();
        assert_eq!(config.api.base_url, "http://backend:8080");
        assert_eq!(config.api.timeout_secs, 4);
        assert_eq!(config.dashboard.backend_label, "drift API");
        assert_eq!(config.output.format, OutputFormat::Html);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.api.use_system_proxy);

        clear_env();
    }

    #[test]
    fn test_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("DRIFTRADAR_API_TIMEOUT_SECS", "soon");
        let err = apply_env_overrides(Config::default()).unwrap_err();
        assert!(matches!(err, DriftRadarError::Config(_)), "Should be a Config error");

        clear_env();
    }

    #[test]
    fn test_load_from_file_toml_keeps_defaults() {
        let toml_content = r#"
[api]
base_url = "http://drift.internal:8000"

[[dashboard.series]]
feature_name = "tenure"
metric_type = "data_drift_psi_num"
label = "Tenure Drift Score"
color = "rgb(75, 192, 192)"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("Should load config from TOML");
        assert_eq!(config.api.base_url, "http://drift.internal:8000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.dashboard.backend_label, "FastAPI backend");
        assert_eq!(
            config.dashboard.series,
            vec![SeriesDescriptor::new(
                "tenure",
                "data_drift_psi_num",
                "Tenure Drift Score",
                "rgb(75, 192, 192)"
            )]
        );

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/driftradar.toml")));
        assert!(matches!(result, Err(DriftRadarError::Config(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", Path::new("driftradar.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.api.base_url = "not a url".into();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.api.base_url = "ftp://backend".into();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.dashboard.series[1].label = " ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("Series #2"));

        assert!(validate(&Config::default()).is_ok());
    }
}
