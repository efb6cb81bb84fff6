//! Application configuration loaded from an optional TOML file
//!
//! ```toml
//! show_banner = true
//!
//! [ledger]
//! account_prefix = "ACC"
//! sequence_base = 1000
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use transx_core::LedgerConfig;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Account numbering
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Print the welcome banner on start-up
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_show_banner() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            show_banner: default_show_banner(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;

        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Account input is uppercased before lookup, so the prefix must be
    /// uppercase too or no account could ever be found again.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.ledger.account_prefix;

        if prefix.is_empty() {
            return Err(ConfigError::Validation(
                "account_prefix cannot be empty".to_string(),
            ));
        }

        if !prefix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(ConfigError::Validation(format!(
                "account_prefix '{}' must contain only uppercase letters and digits",
                prefix
            )));
        }

        Ok(())
    }
}
