//! Configuration handling for the TUI

use crate::state::DEFAULT_RESET_DELAY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the start route
pub const ROUTE_ENV: &str = "PAGES_TUI_ROUTE";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "pages_tui=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Path opened at startup, e.g. "/contact"
    pub initial_route: Option<String>,
    /// Delay before a submitted form resets, in milliseconds
    pub reset_delay_ms: Option<u64>,
    /// tracing filter directive, e.g. "pages_tui=debug"
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "pages-tui", "pages-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir, defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides
    pub fn with_env(mut self) -> Self {
        if let Ok(route) = std::env::var(ROUTE_ENV) {
            if !route.trim().is_empty() {
                self.initial_route = Some(route);
            }
        }
        self
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RESET_DELAY)
    }

    pub fn initial_path(&self) -> &str {
        self.initial_route.as_deref().unwrap_or("/")
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pages-tui-test-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.initial_route.is_none());
        assert!(config.reset_delay_ms.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.reset_delay(), Duration::from_millis(2000));
        assert_eq!(config.initial_path(), "/");
        assert_eq!(config.log_filter(), "pages_tui=info");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig {
            initial_route: Some("/contact".to_string()),
            reset_delay_ms: Some(500),
            log_filter: Some("pages_tui=debug".to_string()),
        };
        assert_eq!(config.reset_delay(), Duration::from_millis(500));
        assert_eq!(config.initial_path(), "/contact");
        assert_eq!(config.log_filter(), "pages_tui=debug");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"initial_route": "/about", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.initial_route.as_deref(), Some("/about"));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("config.json");
        let config = AppConfig {
            initial_route: Some("/signup".to_string()),
            reset_delay_ms: Some(1500),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let path = temp_path("missing.json");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let path = temp_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
