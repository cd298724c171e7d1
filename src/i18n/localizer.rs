//! Localizer: language selection, dictionary ownership and lookups
//!
//! The active language and its dictionary live together in one immutable
//! [`ActiveLanguage`] snapshot. Lookups clone the current snapshot and work
//! on it without holding any lock; a language switch loads the new
//! dictionary first and then replaces the snapshot in a single write.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use crate::config::I18nConfig;
use crate::i18n::dictionary::{Dictionary, Node};
use crate::i18n::key::Key;
use crate::i18n::language::{self, LanguageCode, LanguageResolver};
use crate::i18n::params::{interpolate, FormatParams, ParamValue};
use crate::i18n::resources::{
    DirectoryResources, FixedLocale, LocaleHint, ResourceProvider, SystemLocale,
};
use crate::utils::errors::{LoadError, LoadResult, LocalizerError, Result};
use crate::utils::logging;

/// A language code paired with the dictionary loaded for it
#[derive(Debug)]
pub struct ActiveLanguage {
    code: LanguageCode,
    dictionary: Dictionary,
}

impl ActiveLanguage {
    pub fn code(&self) -> &LanguageCode {
        &self.code
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Resolve `key` against this dictionary and interpolate `params`
    ///
    /// A missing key is not an error: it is logged and the key itself is
    /// returned. A key that resolves to a group, or to a plural entry
    /// without a numeric `count`, fails with [`LocalizerError::KeyShape`].
    pub fn lookup(&self, key: &Key, params: &FormatParams) -> Result<String> {
        let Some(node) = self.dictionary.get(key) else {
            let rendered = key.to_string();
            logging::log_missing_key(self.code.as_str(), &rendered);
            return Ok(rendered);
        };

        let template = match node {
            Node::Text(text) => text.as_str(),
            Node::Plural(plural) => match params.count().and_then(ParamValue::as_number) {
                Some(count) => plural.select(count),
                None => return Err(LocalizerError::KeyShape { key: key.to_string() }),
            },
            Node::Group(_) => return Err(LocalizerError::KeyShape { key: key.to_string() }),
        };

        Ok(interpolate(template, params)?)
    }
}

/// Statistics about the active dictionary
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub language: LanguageCode,
    /// Final values: text leaves plus plural entries
    pub total_keys: usize,
    pub plural_keys: usize,
    pub available_languages: Vec<LanguageCode>,
}

/// Runtime string resolver for one active language
#[derive(Debug)]
pub struct Localizer {
    resources: Arc<dyn ResourceProvider>,
    active: RwLock<Arc<ActiveLanguage>>,
    // Serializes load-and-swap so concurrent switches cannot interleave.
    switch: Mutex<()>,
}

/// Construction options for a [`Localizer`]
#[derive(Debug)]
pub struct LocalizerBuilder {
    resources: Arc<dyn ResourceProvider>,
    preferred: Option<LanguageCode>,
    locale_hint: Box<dyn LocaleHint>,
    resolver: LanguageResolver,
}

impl LocalizerBuilder {
    /// Explicitly requested language, tried first
    pub fn preferred(mut self, code: impl Into<LanguageCode>) -> Self {
        self.preferred = Some(code.into());
        self
    }

    /// Explicitly requested language, if any
    pub fn preferred_opt(mut self, code: Option<LanguageCode>) -> Self {
        self.preferred = code;
        self
    }

    /// Source of the host locale, tried after the requested language
    pub fn locale_hint(mut self, hint: impl LocaleHint + 'static) -> Self {
        self.locale_hint = Box::new(hint);
        self
    }

    /// Fixed default language, tried after the host locale
    pub fn default_language(mut self, code: impl Into<LanguageCode>) -> Self {
        self.resolver = LanguageResolver::new(code);
        self
    }

    /// Select a language and load its dictionary
    ///
    /// Candidates come from the fallback queue first; if none of those load,
    /// the remaining available languages are tried in enumeration order.
    /// Fails when no resources exist or when every available language fails
    /// to load.
    pub fn build(self) -> Result<Localizer> {
        let available = self.resources.list_available();
        if available.is_empty() {
            return Err(LoadError::NoLanguages {
                location: self.resources.location(),
            }
            .into());
        }

        let hint = self.locale_hint.locale();
        let queue = self
            .resolver
            .fallback_queue(self.preferred.as_ref(), hint.as_ref(), &available);
        debug!(queue = ?queue, "Built language fallback queue");

        let candidates: Vec<LanguageCode> = queue.iter().chain(available.iter()).cloned().collect();
        let mut tried: Vec<LanguageCode> = Vec::new();
        loop {
            let remaining: Vec<LanguageCode> = candidates
                .iter()
                .filter(|code| !tried.contains(*code))
                .cloned()
                .collect();

            let Some(code) = language::resolve(&remaining, &available) else {
                return Err(LoadError::Exhausted { tried }.into());
            };

            match load_dictionary(self.resources.as_ref(), &code) {
                Ok(dictionary) => {
                    logging::log_language_selected(code.as_str(), queue.len(), available.len());
                    return Ok(Localizer {
                        resources: self.resources,
                        active: RwLock::new(Arc::new(ActiveLanguage { code, dictionary })),
                        switch: Mutex::new(()),
                    });
                }
                Err(e) => {
                    logging::log_load_failure(code.as_str(), &e.to_string());
                    tried.push(code);
                }
            }
        }
    }
}

fn load_dictionary(resources: &dyn ResourceProvider, code: &LanguageCode) -> LoadResult<Dictionary> {
    let bytes = resources.read_resource(code).map_err(|source| LoadError::Read {
        code: code.clone(),
        source,
    })?;
    let dictionary = Dictionary::parse(code, &bytes)?;
    logging::log_dictionary_loaded(code.as_str(), dictionary.key_counts().0);
    Ok(dictionary)
}

impl Localizer {
    /// Start building a localizer over `resources`
    ///
    /// Defaults: no requested language, the operating system locale as hint,
    /// and `en-US` as the fixed default.
    pub fn builder(resources: impl ResourceProvider + 'static) -> LocalizerBuilder {
        LocalizerBuilder {
            resources: Arc::new(resources),
            preferred: None,
            locale_hint: Box::new(SystemLocale),
            resolver: LanguageResolver::default(),
        }
    }

    /// Create a localizer with an optional preferred language
    pub fn new(resources: impl ResourceProvider + 'static, preferred: Option<LanguageCode>) -> Result<Self> {
        Self::builder(resources).preferred_opt(preferred).build()
    }

    /// Create a localizer over a resource directory as configured
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        let builder = Self::builder(DirectoryResources::new(&config.resource_dir))
            .preferred_opt(config.preferred_language.as_deref().map(LanguageCode::from))
            .default_language(config.default_language.as_str());

        if config.use_system_locale {
            builder.build()
        } else {
            builder.locale_hint(FixedLocale::none()).build()
        }
    }

    /// The current language and dictionary as one consistent snapshot
    pub fn snapshot(&self) -> Arc<ActiveLanguage> {
        let guard = self.active.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn current_language(&self) -> LanguageCode {
        self.snapshot().code.clone()
    }

    /// Languages the resource collaborator can currently serve
    pub fn available_languages(&self) -> Vec<LanguageCode> {
        self.resources.list_available()
    }

    pub fn is_language_available(&self, code: impl AsRef<str>) -> bool {
        let code = code.as_ref();
        self.resources
            .list_available()
            .iter()
            .any(|available| available.as_str() == code)
    }

    /// Switch to `code`
    ///
    /// The new dictionary is loaded before the swap; on any failure the
    /// previous language and dictionary stay active.
    pub fn set_language(&self, code: impl Into<LanguageCode>) -> Result<()> {
        let code = code.into();
        if !self.is_language_available(&code) {
            return Err(LocalizerError::UnavailableLanguage { code });
        }

        let _switching = self.switch.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = self.load_and_swap(code)?;
        logging::log_language_switch(previous.code.as_str(), self.snapshot().code.as_str());
        Ok(())
    }

    /// Re-read the active language's resource
    pub fn reload(&self) -> Result<()> {
        let _switching = self.switch.lock().unwrap_or_else(PoisonError::into_inner);
        let code = self.current_language();
        self.load_and_swap(code)?;
        Ok(())
    }

    fn load_and_swap(&self, code: LanguageCode) -> Result<Arc<ActiveLanguage>> {
        let dictionary = load_dictionary(self.resources.as_ref(), &code).map_err(|e| {
            logging::log_load_failure(code.as_str(), &e.to_string());
            e
        })?;

        let next = Arc::new(ActiveLanguage { code, dictionary });
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::replace(&mut *guard, next))
    }

    /// Look up `key` in the active language and interpolate `params`
    pub fn lookup(&self, key: impl Into<Key>, params: &FormatParams) -> Result<String> {
        self.snapshot().lookup(&key.into(), params)
    }

    /// Look up `key` without parameters
    pub fn t(&self, key: impl Into<Key>) -> Result<String> {
        self.lookup(key, &FormatParams::new())
    }

    /// Statistics about the active dictionary
    pub fn stats(&self) -> TranslationStats {
        let snapshot = self.snapshot();
        let (total_keys, plural_keys) = snapshot.dictionary.key_counts();
        TranslationStats {
            language: snapshot.code.clone(),
            total_keys,
            plural_keys,
            available_languages: self.available_languages(),
        }
    }
}
