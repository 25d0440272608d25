//! Configuration management and validation
//!
//! Provides layered configuration for the CLI: built-in defaults, then an
//! optional TOML file, then command-line overrides. The library itself needs
//! no configuration; this exists so deployments can pin the asset location
//! and policy without repeating flags.

use crate::constants::DEFAULT_ASSET_NAME;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Asset location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Path to the coordinate asset file
    pub path: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ASSET_NAME),
        }
    }
}

/// Loading behavior settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadingConfig {
    /// Abort the load on the first bad span instead of skipping it
    #[serde(default)]
    pub strict: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Asset location settings
    #[serde(default)]
    pub asset: AssetConfig,

    /// Loading behavior settings
    #[serde(default)]
    pub loading: LoadingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join("gradmap").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration in layers: defaults, then an optional config file
    ///
    /// An explicitly passed file must exist; the default location is only
    /// used when present.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Self::default_config_path()?;
                if default_path.exists() {
                    Self::load_from_file(&default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.asset.path.as_os_str().is_empty() {
            return Err(Error::configuration("Asset path must not be empty"));
        }

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}': must be one of {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
