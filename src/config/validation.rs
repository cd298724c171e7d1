//! Configuration validation module
//!
//! This module provides validation functions for configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{LocalizerError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.resource_dir.is_empty() {
        return Err(LocalizerError::Config(
            "Resource directory is required".to_string()
        ));
    }

    if config.default_language.trim().is_empty() {
        return Err(LocalizerError::Config(
            "Default language is required".to_string()
        ));
    }

    if let Some(preferred) = &config.preferred_language {
        if preferred.trim().is_empty() {
            return Err(LocalizerError::Config(
                "Preferred language must not be blank when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LocalizerError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LocalizerError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
