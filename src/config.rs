//! Configuration management and validation.
//!
//! Provides the engine configuration with layered loading: built-in
//! defaults, then an optional TOML file, then command-line overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATA_PATH, DEFAULT_SUGGESTION_COUNT,
};
use crate::error::{GroundwaterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output rendering for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable coloured text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Global configuration for groundwater analytics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path to the monitoring data table
    pub data_path: PathBuf,

    /// Number of known locations suggested when a query has no data
    pub suggestion_count: usize,

    /// Fail the load if any row is rejected
    pub strict: bool,

    /// Default output format
    pub output_format: OutputFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            strict: false,
            output_format: OutputFormat::Text,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| GroundwaterError::configuration(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GroundwaterError::configuration(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Default user config location, e.g. ~/.config/groundwater-analytics/config.toml
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve configuration from an explicit file, the user config file, or defaults
    ///
    /// An explicit path must exist. The user config file is only read if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading user configuration from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(GroundwaterError::configuration("data_path must not be empty"));
        }
        Ok(())
    }

    /// Override the data path
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Override the suggestion count
    pub fn with_suggestion_count(mut self, count: usize) -> Self {
        self.suggestion_count = count;
        self
    }

    /// Enable strict loading
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Override the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
