//! Resource and host-locale collaborators
//!
//! The localizer never touches the filesystem or the host environment
//! directly. It asks a [`ResourceProvider`] which languages exist and for the
//! raw bytes of one of them, and a [`LocaleHint`] for the ambient language.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::i18n::language::LanguageCode;

/// File extension of dictionary resources
pub const RESOURCE_EXTENSION: &str = "json";

/// Source of per-language dictionary resources
pub trait ResourceProvider: Send + Sync {
    /// Languages that have a resource, without duplicates, in enumeration order
    fn list_available(&self) -> Vec<LanguageCode>;

    /// Raw bytes of the resource for `code`
    fn read_resource(&self, code: &LanguageCode) -> io::Result<Vec<u8>>;

    /// Human-readable location used in diagnostics
    fn location(&self) -> String;
}

/// Dictionaries stored as `<dir>/<code>.json`
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the resource for `code`
    pub fn path_for(&self, code: &LanguageCode) -> PathBuf {
        self.root.join(format!("{}.{}", code, RESOURCE_EXTENSION))
    }
}

impl ResourceProvider for DirectoryResources {
    /// Sorted by code; a missing or unreadable directory yields no languages
    fn list_available(&self) -> Vec<LanguageCode> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.root.display(), error = %e, "Translations directory not readable");
                return Vec::new();
            }
        };

        let mut codes: Vec<LanguageCode> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some(RESOURCE_EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|stem| stem.to_str()).map(LanguageCode::from))
            .collect();

        codes.sort();
        codes.dedup();
        debug!(path = %self.root.display(), count = codes.len(), "Enumerated translation files");
        codes
    }

    fn read_resource(&self, code: &LanguageCode) -> io::Result<Vec<u8>> {
        fs::read(self.path_for(code))
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

/// Dictionaries held in memory, listed in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    documents: Vec<(LanguageCode, Vec<u8>)>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the document for `code`, builder style
    pub fn with(mut self, code: impl Into<LanguageCode>, document: impl Into<Vec<u8>>) -> Self {
        self.insert(code, document);
        self
    }

    /// Add or replace the document for `code`
    pub fn insert(&mut self, code: impl Into<LanguageCode>, document: impl Into<Vec<u8>>) {
        let code = code.into();
        let document = document.into();
        match self.documents.iter_mut().find(|(existing, _)| *existing == code) {
            Some((_, slot)) => *slot = document,
            None => self.documents.push((code, document)),
        }
    }
}

impl ResourceProvider for MemoryResources {
    fn list_available(&self) -> Vec<LanguageCode> {
        self.documents.iter().map(|(code, _)| code.clone()).collect()
    }

    fn read_resource(&self, code: &LanguageCode) -> io::Result<Vec<u8>> {
        self.documents
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, document)| document.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no resource for {}", code)))
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Source of the host environment's configured language
pub trait LocaleHint: Send + Sync {
    fn locale(&self) -> Option<LanguageCode>;
}

/// Host locale as reported by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleHint for SystemLocale {
    fn locale(&self) -> Option<LanguageCode> {
        sys_locale::get_locale().and_then(|raw| LanguageCode::from_host_locale(&raw))
    }
}

/// A fixed (possibly absent) locale, for hosts that know their language
/// and for deterministic tests
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(pub Option<LanguageCode>);

impl FixedLocale {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(code: impl Into<LanguageCode>) -> Self {
        Self(Some(code.into()))
    }
}

impl LocaleHint for FixedLocale {
    fn locale(&self) -> Option<LanguageCode> {
        self.0.clone()
    }
}

impl fmt::Debug for dyn ResourceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceProvider")
            .field("location", &self.location())
            .finish()
    }
}

impl fmt::Debug for dyn LocaleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleHint")
            .field("locale", &self.locale())
            .finish()
    }
}
