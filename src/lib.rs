//! lingokit
//!
//! A runtime string-localization resolver. Given a directory of per-language
//! dictionary files it selects an active language, resolves flat and
//! dot-nested keys, picks zero/one/other plural variants by count, and
//! interpolates `%{name}` parameters into the resolved template.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LocalizerError, LoadError, FormatError, Result};

// Re-export main components for easy access
pub use i18n::{FormatParams, Key, LanguageCode, Localizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
