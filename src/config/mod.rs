//! Configuration management.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for peirce-annotate.
#[derive(Debug, Clone)]
pub struct PeirceConfig {
    /// Host the checking service listens on.
    pub server_host: String,
    /// Port the checking service listens on.
    pub server_port: u16,
    /// Path of the annotation database file.
    pub data_file: PathBuf,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Host of the checking service.
    pub server_host: Option<String>,
    /// Port of the checking service.
    pub server_port: Option<u16>,
    /// Annotation database path.
    pub data_file: Option<String>,
}

impl Default for PeirceConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            data_file: PathBuf::from(".peirce/annotations.json"),
        }
    }
}

impl PeirceConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration: defaults, then the optional TOML file, then
    /// `PEIRCE_HOST` / `PEIRCE_PORT` / `PEIRCE_DATA_FILE` environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if an environment override is malformed.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            let raw = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
                operation: "read_config".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;
            let file: ConfigFile = toml::from_str(&raw).map_err(|e| Error::OperationFailed {
                operation: "parse_config".to_string(),
                cause: e.to_string(),
            })?;
            if let Some(host) = file.server_host {
                config.server_host = host;
            }
            if let Some(port) = file.server_port {
                config.server_port = port;
            }
            if let Some(data_file) = file.data_file {
                config.data_file = PathBuf::from(data_file);
            }
        }

        if let Ok(host) = std::env::var("PEIRCE_HOST") {
            config.server_host = host;
        }
        if let Ok(port) = std::env::var("PEIRCE_PORT") {
            config.server_port = port.parse().map_err(|_| {
                Error::InvalidInput(format!("PEIRCE_PORT is not a port number: {port}"))
            })?;
        }
        if let Ok(data_file) = std::env::var("PEIRCE_DATA_FILE") {
            config.data_file = PathBuf::from(data_file);
        }

        Ok(config)
    }

    /// Base URL of the checking service API.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        format!("http://{}:{}/api", self.server_host, self.server_port)
    }
}
