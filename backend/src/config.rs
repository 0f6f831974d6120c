//! Dashboard configuration.
//!
//! Settings come from an optional `dashboard.toml` and are then overridden by
//! environment variables, so a deployment can run with no file at all.
//!
//! # Environment Variables
//! - `DASHBOARD_CONFIG` (optional): explicit path to the TOML file
//! - `SALES_DATA_PATH` (optional): CSV dataset path
//! - `HOST` (optional, default: 0.0.0.0): bind host
//! - `PORT` (optional, default: 8050): bind port
//! - `DASHBOARD_DEBUG` (optional, default: false): verbose logging

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::data::DEFAULT_DATA_PATH;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
}

/// Dataset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default location, if a file exists.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration file {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the full configuration: file (explicit or default location),
    /// then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("DASHBOARD_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        base.with_env_overrides()
    }

    /// Apply `SALES_DATA_PATH`, `HOST`, `PORT` and `DASHBOARD_DEBUG`.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(path) = env::var("SALES_DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port.clone(),
                reason: "must be a valid port number".to_string(),
            })?;
        }
        if let Ok(debug) = env::var("DASHBOARD_DEBUG") {
            self.server.debug = parse_flag(&debug).ok_or_else(|| ConfigError::InvalidValue {
                key: "DASHBOARD_DEBUG".to_string(),
                value: debug.clone(),
                reason: "expected true/false".to_string(),
            })?;
        }
        Ok(self)
    }

    /// Socket address the server binds to.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "host".to_string(),
            value: self.server.host.clone(),
            reason: "not an IP address".to_string(),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8050);
        assert!(!config.server.debug);
        assert_eq!(config.data.path, PathBuf::from("historical_automobile_sales.csv"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DashboardConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data, DataSettings::default());
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
            [server]
            host = "127.0.0.1"
            port = 8081
            debug = true

            [data]
            path = "data/sales.csv"
        "#;
        let config = DashboardConfig::from_toml_str(content).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.server.debug);
        assert_eq!(config.data.path, PathBuf::from("data/sales.csv"));
        assert_eq!(
            config.bind_address().unwrap(),
            "127.0.0.1:8081".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = DashboardConfig::from_toml_str("[server]\nport = \"eighty\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DashboardConfig::from_file("no/such/dashboard.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_bind_address_rejects_hostname() {
        let mut config = DashboardConfig::default();
        config.server.host = "not a host".to_string();
        assert!(matches!(
            config.bind_address(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
