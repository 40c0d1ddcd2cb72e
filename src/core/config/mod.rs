//! core::config
//!
//! Model configuration schema and loading.
//!
//! # Overview
//!
//! A metadata document carries a [`ModelConfig`] that its owning code
//! consults when presenting field state (for now, the order of attribute
//! snapshots). Fields themselves never read configuration.
//!
//! # Sources
//!
//! - [`ModelConfig::default`] when nothing is configured
//! - [`ModelConfig::from_toml_str`] for embedded configuration
//! - [`ModelConfig::load`] for a TOML file on disk
//!
//! # Example
//!
//! ```
//! use xmpfield::core::config::{AttributeOrder, ModelConfig};
//!
//! let config = ModelConfig::from_toml_str("[attributes]\norder = \"name\"\n").unwrap();
//! assert_eq!(config.attribute_order(), AttributeOrder::Name);
//! ```

pub mod schema;

pub use schema::{AttributeOrder, AttributeSettings, ModelConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

impl ModelConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the text is not valid TOML or
    /// contains unknown keys or values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, PathBuf::new())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read, and
    /// `ConfigError::ParseError` if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&text, path.to_path_buf())?;
        tracing::debug!(path = %path.display(), order = ?config.attribute_order(), "loaded model config");
        Ok(config)
    }

    fn parse(text: &str, path: PathBuf) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}
