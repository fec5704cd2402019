//! Engine construction settings.

use super::types::{CELL_COUNT, Variant};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings used to build a [`GridEngine`](crate::GridEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GridConfig {
    /// Rule variant, fixed for the lifetime of the engine.
    #[serde(default)]
    variant: Variant,

    /// Number of playable cells the front end managed to set up.
    #[serde(default = "default_cell_count")]
    #[new(value = "CELL_COUNT")]
    cell_count: usize,
}

#[instrument]
fn default_cell_count() -> usize {
    CELL_COUNT
}

impl GridConfig {
    /// Returns a copy with a different cell count.
    pub fn with_cell_count(self, cell_count: usize) -> Self {
        Self { cell_count, ..self }
    }

    /// Returns true if a full board can be created from this config.
    pub fn is_playable(&self) -> bool {
        self.cell_count == CELL_COUNT
    }

    /// Parses configuration from a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse grid config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading grid config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(variant = %config.variant, cell_count = config.cell_count, "Grid config loaded");
        Ok(config)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_playable_classic() {
        let config = GridConfig::default();
        assert_eq!(*config.variant(), Variant::Classic);
        assert_eq!(*config.cell_count(), 9);
        assert!(config.is_playable());
    }

    #[test]
    fn test_parse_with_defaults() {
        let config = GridConfig::from_toml_str("variant = \"mutation\"").unwrap();
        assert_eq!(*config.variant(), Variant::Mutation);
        assert!(config.is_playable());
    }

    #[test]
    fn test_short_board_is_not_playable() {
        let config = GridConfig::from_toml_str("cell_count = 4").unwrap();
        assert!(!config.is_playable());
        assert!(!GridConfig::default().with_cell_count(10).is_playable());
    }

    #[test]
    fn test_parse_error_reports_message() {
        let err = GridConfig::from_toml_str("variant = \"chess\"").unwrap_err();
        assert!(err.message.contains("Failed to parse grid config"));
    }
}
