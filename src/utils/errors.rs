//! Error handling for lingokit
//!
//! This module defines the error types returned by the localizer and
//! its collaborators, and a unified classification of how fatal they are.

use thiserror::Error;

use crate::i18n::LanguageCode;

/// Main error type for lingokit
#[derive(Error, Debug)]
pub enum LocalizerError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Language not available: {code}")]
    UnavailableLanguage { code: LanguageCode },

    #[error("Key '{key}' points to a group of entries, not a final value")]
    KeyShape { key: String },

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Dictionary loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No language resources found at {location}")]
    NoLanguages { location: String },

    #[error("Failed to read resource for {code}: {source}")]
    Read {
        code: LanguageCode,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse resource for {code}: {source}")]
    Parse {
        code: LanguageCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resource for {code} is not a mapping at the top level")]
    NotAMapping { code: LanguageCode },

    #[error("None of the candidate languages could be loaded (tried: {})", join_codes(.tried))]
    Exhausted { tried: Vec<LanguageCode> },
}

/// Template interpolation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Missing interpolation parameter '{name}'")]
    MissingParameter { name: String },

    #[error("Unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },
}

/// Result type alias for lingokit operations
pub type Result<T> = std::result::Result<T, LocalizerError>;

/// Result type alias for dictionary loading
pub type LoadResult<T> = std::result::Result<T, LoadError>;

fn join_codes(codes: &[LanguageCode]) -> String {
    codes
        .iter()
        .map(LanguageCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl LocalizerError {
    /// Check if the error leaves the localizer usable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LocalizerError::Load(LoadError::NoLanguages { .. }) => false,
            LocalizerError::Load(LoadError::Exhausted { .. }) => false,
            LocalizerError::Load(_) => true,
            LocalizerError::UnavailableLanguage { .. } => true,
            LocalizerError::KeyShape { .. } => false,
            LocalizerError::Format(_) => false,
            LocalizerError::Config(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocalizerError::Load(LoadError::NoLanguages { .. }) => ErrorSeverity::Critical,
            LocalizerError::Load(LoadError::Exhausted { .. }) => ErrorSeverity::Critical,
            LocalizerError::Config(_) => ErrorSeverity::Critical,
            LocalizerError::UnavailableLanguage { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}
