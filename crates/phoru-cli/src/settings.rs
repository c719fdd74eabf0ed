//! CLI and server settings loaded from TOML.
//!
//! - `default_toml()` returns the embedded defaults
//! - `parse_settings_toml(text)` parses and validates a full document
//! - `load(path)` reads a file, or falls back to the defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub server: ServerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    pub sample_text: String,
    pub body_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    pub filter: String,
}

/// Load settings from `path`, or the embedded defaults when `None`.
pub fn load(path: Option<&Path>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_settings_toml(&content)
        }
        None => parse_settings_toml(DEFAULT_SETTINGS_TOML),
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.server.sample_text.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "server.sample_text".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.server.body_limit == 0 {
        return Err(SettingsError::InvalidValue {
            field: "server.body_limit".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if let Err(e) = EnvFilter::try_new(&s.log.filter) {
        return Err(SettingsError::InvalidValue {
            field: "log.filter".to_string(),
            reason: e.to_string(),
        });
    }
    Ok(())
}
