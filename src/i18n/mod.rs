//! Internationalization module
//!
//! This module handles runtime string localization: language discovery and
//! fallback selection, dictionary loading, nested key resolution, plural
//! selection and parameter interpolation.

pub mod dictionary;
pub mod key;
pub mod language;
pub mod localizer;
pub mod params;
pub mod plural;
pub mod resources;

// Re-export commonly used i18n components
pub use dictionary::{Dictionary, Node};
pub use key::Key;
pub use language::{LanguageCode, LanguageResolver, DEFAULT_LANGUAGE};
pub use localizer::{ActiveLanguage, Localizer, LocalizerBuilder, TranslationStats};
pub use params::{FormatParams, ParamValue};
pub use plural::{PluralCategory, PluralNode};
pub use resources::{DirectoryResources, FixedLocale, LocaleHint, MemoryResources, ResourceProvider, SystemLocale};
