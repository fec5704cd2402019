//! Application configuration for the console front end.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use toetictac_rules::{ConfigError, Variant};
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Variant the first game starts with.
    #[serde(default)]
    variant: Variant,

    /// How long a redrawn cell stays busy, in milliseconds.
    #[serde(default = "default_cooldown_ms")]
    cooldown_ms: u64,

    /// Whether to mark highlighted cells in the mutation variant.
    #[serde(default = "default_show_highlights")]
    show_highlights: bool,
}

#[instrument]
fn default_cooldown_ms() -> u64 {
    400
}

#[instrument]
fn default_show_highlights() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            cooldown_ms: default_cooldown_ms(),
            show_highlights: default_show_highlights(),
        }
    }
}

impl AppConfig {
    /// Creates a configuration with explicit values.
    #[instrument]
    pub fn new(variant: Variant, cooldown_ms: u64, show_highlights: bool) -> Self {
        Self {
            variant,
            cooldown_ms,
            show_highlights,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading app config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            variant = %config.variant,
            cooldown_ms = config.cooldown_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        variant: Option<Variant>,
        cooldown_ms: Option<u64>,
        hide_highlights: bool,
    ) -> Self {
        Self {
            variant: variant.unwrap_or(self.variant),
            cooldown_ms: cooldown_ms.unwrap_or(self.cooldown_ms),
            show_highlights: self.show_highlights && !hide_highlights,
        }
    }

    /// Busy window for redrawn cells.
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}
