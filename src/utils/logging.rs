//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for localizer events.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{LocalizerError, Result};

/// Initialize logging based on configuration
///
/// Console output goes to stderr, leaving stdout to the caller. When a log
/// directory is configured, the returned guard must be kept alive for
/// buffered file output to be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| LocalizerError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "lingokit.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| LocalizerError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the language chosen at construction time
pub fn log_language_selected(language: &str, candidates: usize, available: usize) {
    info!(
        language = language,
        candidates = candidates,
        available = available,
        "Language selected"
    );
}

/// Log a successful language switch
pub fn log_language_switch(from: &str, to: &str) {
    info!(from = from, to = to, "Language switched");
}

/// Log a lookup whose key is absent from the active dictionary
pub fn log_missing_key(language: &str, key: &str) {
    warn!(
        language = language,
        key = key,
        "Translation key not found"
    );
}

/// Log a resource that failed to load
pub fn log_load_failure(language: &str, error: &str) {
    error!(
        language = language,
        error = error,
        "Failed to load translations"
    );
}

/// Log dictionary statistics after a load
pub fn log_dictionary_loaded(language: &str, key_count: usize) {
    debug!(
        language = language,
        key_count = key_count,
        "Dictionary loaded"
    );
}
