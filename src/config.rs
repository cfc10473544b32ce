//! Configuration module
//!
//! Reads `config.toml` from the user config directory
//! (`~/.config/parkwise/config.toml` on Linux). Every section is optional.
//!
//! ```toml
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! format = "text"     # text or json
//!
//! [catalog]
//! path = "/etc/parkwise/spots.json"
//!
//! [booking]
//! reference_prefix = "PW"
//! currency = "PKR"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::booking::DEFAULT_REFERENCE_PREFIX;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parkwise")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML spot list; the built-in demo catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            reference_prefix: default_reference_prefix(),
            currency: default_currency(),
        }
    }
}

fn default_level() -> String {
    "info".into()
}
fn default_format() -> String {
    "text".into()
}
fn default_reference_prefix() -> String {
    DEFAULT_REFERENCE_PREFIX.into()
}
fn default_currency() -> String {
    "PKR".into()
}

impl AppConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation {
                    field: "logging.format",
                    reason: format!("expected \"text\" or \"json\", got \"{}\"", other),
                })
            }
        }

        let prefix = &self.booking.reference_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation {
                field: "booking.reference_prefix",
                reason: format!("must be non-empty and alphanumeric, got \"{}\"", prefix),
            });
        }

        if self.booking.currency.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "booking.currency",
                reason: "must not be empty".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.booking.reference_prefix, "PW");
        assert_eq!(config.booking.currency, "PKR");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AppConfig::from_toml(
            r#"
[logging]
level = "debug"

[catalog]
path = "/srv/parkwise/spots.json"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "text");
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(Path::new("/srv/parkwise/spots.json"))
        );
        assert_eq!(config.booking, BookingConfig::default());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation {
                field: "logging.format",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_reference_prefix() {
        let err = AppConfig::from_toml("[booking]\nreference_prefix = \"P W\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation {
                field: "booking.reference_prefix",
                ..
            }
        ));
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/parkwise/config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[booking]\ncurrency = \"USD\"").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.booking.currency, "USD");
    }

    #[test]
    fn toml_output_parses_back() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        assert!(default_config_path().ends_with("parkwise/config.toml"));
    }
}
