//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Directory holding one `<code>.json` file per language
    pub resource_dir: String,
    /// Fixed default, tried after the requested language and the host locale
    pub default_language: String,
    /// Explicitly requested language
    pub preferred_language: Option<String>,
    /// Whether the host locale takes part in language selection
    pub use_system_locale: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling log files; stdout only when unset
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Environment variables use the `LINGOKIT` prefix and `__` as the
    /// section separator, e.g. `LINGOKIT__I18N__DEFAULT_LANGUAGE=de-DE`.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("lingokit")
    }

    /// Load settings from the named configuration file (extension optional)
    /// layered under the environment
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("LINGOKIT").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LocalizerError> {
        super::validation::validate_settings(self)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            resource_dir: "locales".to_string(),
            default_language: crate::i18n::DEFAULT_LANGUAGE.to_string(),
            preferred_language: None,
            use_system_locale: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
