//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::ClientConfig;
use crate::metrics::TimeFrame;
use crate::view::{Tab, ViewSelection};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metrics backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    /// 0 disables the timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_metrics_path() -> String {
    "/dashboard".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            metrics_path: default_metrics_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Settings for `MetricsClient`
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            metrics_path: self.metrics_path.clone(),
            request_timeout: (self.request_timeout_secs > 0)
                .then(|| Duration::from_secs(self.request_timeout_secs)),
        }
    }
}

/// Initial selection of every page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub time_frame: TimeFrame,

    #[serde(default)]
    pub show_trend: bool,

    #[serde(default)]
    pub tab: Tab,
}

impl DashboardConfig {
    pub fn selection(&self) -> ViewSelection {
        ViewSelection::new(self.time_frame)
            .with_trend(self.show_trend)
            .with_tab(self.tab)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("statboard").join("config.toml")),
            Some(PathBuf::from("/etc/statboard/config.toml")),
            Some(PathBuf::from("./statboard.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first file in `paths` that exists and parses.
    ///
    /// Files that exist but fail to load are skipped and returned in
    /// `errors`; nothing is logged here since this runs before logging is
    /// initialised.
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("STATBOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(path) = std::env::var("STATBOARD_METRICS_PATH") {
            self.api.metrics_path = path;
        }
        if let Ok(timeout) = std::env::var("STATBOARD_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Ok(level) = std::env::var("STATBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STATBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the standard config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that were found but could not be loaded
    pub errors: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Log where the config came from and every file that was skipped
    pub fn report(&self) {
        for error in &self.errors {
            tracing::warn!(error = %error, "Skipping config file");
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Statboard Configuration
#
# Environment variables override these settings:
# - STATBOARD_API_URL
# - STATBOARD_METRICS_PATH
# - STATBOARD_REQUEST_TIMEOUT
# - STATBOARD_LOG_LEVEL
# - STATBOARD_LOG_FORMAT

[api]
# Base URL of the dashboard backend
base_url = "http://localhost:3000/api"

# Endpoint returning the metrics document
metrics_path = "/dashboard"

# Request timeout in seconds (0 = none)
request_timeout_secs = 30

[dashboard]
# Initial time frame: daily, monthly or allTime
time_frame = "daily"

# Show growth percentages on the details tab
show_trend = false

# Initial tab: overview or details
tab = "overview"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_template_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.dashboard.time_frame, TimeFrame::Daily);
        assert_eq!(config.dashboard.tab, Tab::Overview);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ntime_frame = \"allTime\"\nshow_trend = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.time_frame, TimeFrame::AllTime);
        assert!(config.dashboard.selection().show_trend);
        assert_eq!(config.api.metrics_path, "/dashboard");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ntime_frame = \"weekly\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/statboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let api = ApiConfig {
            request_timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(api.client_config().request_timeout.is_none());
        assert_eq!(
            ApiConfig::default().client_config().request_timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_search_reports_invalid_file_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("statboard.toml");
        std::fs::write(&broken, "[dashboard]\ntime_frame = \"weekly\"\n").unwrap();

        let loaded = Config::load_first(&[dir.path().join("absent.toml"), broken.clone()]);
        assert!(loaded.source.is_none());
        assert_eq!(loaded.config.dashboard.time_frame, TimeFrame::Daily);
        assert_eq!(loaded.errors.len(), 1);
        match &loaded.errors[0] {
            ConfigError::Parse { path, .. } => assert_eq!(path, &broken),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_search_uses_first_valid_file_after_broken_one() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&broken, "not = [toml").unwrap();
        std::fs::write(&valid, "[dashboard]\ntab = \"details\"\n").unwrap();

        let loaded = Config::load_first(&[broken, valid.clone()]);
        assert_eq!(loaded.source.as_deref(), Some(valid.as_path()));
        assert_eq!(loaded.config.dashboard.tab, Tab::Details);
        assert_eq!(loaded.errors.len(), 1);
    }
}
