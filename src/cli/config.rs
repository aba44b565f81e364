//! Service configuration
//!
//! Loaded from a JSON file; every field has a default and a missing file
//! means all defaults. `PORT` and `LOG_LEVEL` environment variables
//! override the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::file_storage::{validate_file_name, DEFAULT_CONTAINER};
use crate::http_server::HttpServerConfig;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory of the local blob store (default "./data")
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,

    /// Container holding uploaded sales files (default "sales-files")
    #[serde(default = "default_container")]
    pub container: String,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Largest file or request body accepted, in bytes (default 10MB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,

    /// Log filter directive (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("./data")
}
fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}
fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024
} // 10MB
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: default_storage_root(),
            container: default_container(),
            http: HttpServerConfig::default(),
            max_upload_bytes: default_max_upload_bytes(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub fn load(path: &Path) -> CliResult<Self> {
        let mut config = Self::load_file(path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Apply `PORT` and `LOG_LEVEL` overrides from `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT: '{}'", port)))?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.log_level = level.trim().to_string();
            }
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if self.container.contains('/') || validate_file_name(&self.container).is_err() {
            return Err(CliError::config_error(format!(
                "Invalid container name: '{}'",
                self.container
            )));
        }

        if self.max_upload_bytes == 0 {
            return Err(CliError::config_error("max_upload_bytes must be > 0"));
        }

        Ok(())
    }

    /// Directory holding the container's files
    pub fn container_dir(&self) -> PathBuf {
        self.storage_root.join(&self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_file(&temp.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.container, "sales-files");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"container": "uploads", "http": {"port": 8081}}"#).unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.container, "uploads");
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert_eq!(err.code_str(), "SALES_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(|key| match key {
                "PORT" => Some("8080".to_string()),
                "LOG_LEVEL" => Some("debug".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.http.port, 8080);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_env() {
        let mut config = Config::default();
        let result = config.apply_env(|key| (key == "PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = Config {
            max_upload_bytes: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        for container in ["", "a/b", "..", "a\\b"] {
            let config = Config {
                container: container.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "expected {:?} to be rejected", container);
        }
    }

    #[test]
    fn test_container_dir() {
        let config = Config::default();
        assert_eq!(config.container_dir(), PathBuf::from("./data/sales-files"));
    }
}
