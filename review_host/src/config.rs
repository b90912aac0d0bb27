//! Host configuration file
//!
//! A versioned JSON document; every field is optional and falls back to the
//! built-in defaults.

use serde::{Deserialize, Serialize};
use services_overlay_view::{MonospaceMeasure, ViewConfig};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the host configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

/// Host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Version of the config format (for future migrations)
    pub version: u32,
    pub view: ViewConfig,
    /// Fragment rows in the console frame
    pub viewport_rows: usize,
    /// Monospace font advance, pixels
    pub font_advance: f32,
    pub font_line_height: f32,
}

impl HostConfig {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;

    /// Parses a config from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: HostConfig = serde_json::from_slice(bytes)?;

        // Check version compatibility
        if config.version != Self::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }
        Ok(config)
    }

    /// Reads a config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_slice(&bytes)
    }

    pub fn measure(&self) -> MonospaceMeasure {
        MonospaceMeasure::new(self.font_advance, self.font_line_height)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        let measure = MonospaceMeasure::default();
        Self {
            version: Self::CURRENT_VERSION,
            view: ViewConfig::default(),
            viewport_rows: 10,
            font_advance: measure.advance,
            font_line_height: measure.line_height,
        }
    }
}
