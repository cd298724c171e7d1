//! Language codes and fallback selection
//!
//! A [`LanguageCode`] names exactly one translation resource. The
//! [`LanguageResolver`] turns a caller's request, the host locale and the
//! configured default into an ordered fallback queue and picks the first
//! entry the resource collaborator can serve.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language used when neither the caller nor the host names an available one
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Identifier of one translation resource, compared by exact string match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code from any string
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Normalize a host locale string such as `en_US.UTF-8` or `de_DE@euro`
    /// into a resource code (`en-US`, `de-DE`)
    ///
    /// Returns `None` for blank input and for the POSIX `C`/`POSIX` locales,
    /// which name no language.
    pub fn from_host_locale(raw: &str) -> Option<Self> {
        let base = raw
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }

        Some(Self(base.replace('_', "-")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Return the first candidate that appears in `available`
///
/// Pure and total: an empty result means no candidate matched.
pub fn resolve(candidates: &[LanguageCode], available: &[LanguageCode]) -> Option<LanguageCode> {
    candidates
        .iter()
        .find(|candidate| available.contains(candidate))
        .cloned()
}

/// Builds fallback queues and selects a language from them
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    default_language: LanguageCode,
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl LanguageResolver {
    /// Create a resolver with the given fixed default language
    pub fn new(default_language: impl Into<LanguageCode>) -> Self {
        Self {
            default_language: default_language.into(),
        }
    }

    /// Build the ordered candidate list
    ///
    /// Precedence: requested language, host locale hint, fixed default, then
    /// the first available code in the collaborator's enumeration order that
    /// the earlier steps did not already name.
    pub fn fallback_queue(
        &self,
        requested: Option<&LanguageCode>,
        host_hint: Option<&LanguageCode>,
        available: &[LanguageCode],
    ) -> Vec<LanguageCode> {
        let mut queue = Vec::with_capacity(4);
        queue.extend(requested.cloned());
        queue.extend(host_hint.cloned());
        queue.push(self.default_language.clone());
        let last_resort = available.iter().find(|code| !queue.contains(code)).cloned();
        queue.extend(last_resort);
        queue
    }

    /// Select the first queue entry that is available
    pub fn resolve(
        &self,
        requested: Option<&LanguageCode>,
        host_hint: Option<&LanguageCode>,
        available: &[LanguageCode],
    ) -> Option<LanguageCode> {
        resolve(&self.fallback_queue(requested, host_hint, available), available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<LanguageCode> {
        list.iter().map(|c| LanguageCode::new(*c)).collect()
    }

    #[test]
    fn test_resolve_returns_first_available() {
        let candidates = codes(&["fr", "de", "en-US"]);
        let available = codes(&["en-US", "de"]);
        assert_eq!(resolve(&candidates, &available), Some(LanguageCode::new("de")));
    }

    #[test]
    fn test_resolve_none_when_nothing_matches() {
        assert_eq!(resolve(&codes(&["fr"]), &codes(&["de"])), None);
        assert_eq!(resolve(&[], &codes(&["de"])), None);
        assert_eq!(resolve(&codes(&["de"]), &[]), None);
    }

    #[test]
    fn test_resolve_is_exact_match() {
        assert_eq!(resolve(&codes(&["en-us", "en"]), &codes(&["en-US"])), None);
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let candidates = codes(&["fr", "fr", "de", "de"]);
        assert_eq!(
            resolve(&candidates, &codes(&["de"])),
            Some(LanguageCode::new("de"))
        );
    }

    #[test]
    fn test_fallback_queue_order() {
        let resolver = LanguageResolver::default();
        let requested = LanguageCode::new("fr");
        let hint = LanguageCode::new("de-DE");
        let queue = resolver.fallback_queue(Some(&requested), Some(&hint), &codes(&["ru", "en-US"]));
        assert_eq!(queue, codes(&["fr", "de-DE", "en-US", "ru"]));
    }

    #[test]
    fn test_fallback_queue_skips_absent_entries() {
        let resolver = LanguageResolver::new("pt-BR");
        assert_eq!(resolver.fallback_queue(None, None, &[]), codes(&["pt-BR"]));
    }

    #[test]
    fn test_last_resort_skips_codes_already_queued() {
        let resolver = LanguageResolver::default();
        let queue = resolver.fallback_queue(None, None, &codes(&["en-US", "fr-FR"]));
        assert_eq!(queue, codes(&["en-US", "fr-FR"]));

        let hint = LanguageCode::new("de");
        let queue = resolver.fallback_queue(None, Some(&hint), &codes(&["de", "en-US"]));
        assert_eq!(queue, codes(&["de", "en-US"]));
    }

    #[test]
    fn test_default_wins_over_arbitrary_available() {
        let resolver = LanguageResolver::default();
        let requested = LanguageCode::new("ja");
        let available = codes(&["de", "en-US"]);
        assert_eq!(
            resolver.resolve(Some(&requested), None, &available),
            Some(LanguageCode::new("en-US"))
        );
    }

    #[test]
    fn test_last_resort_picks_some_available_language() {
        let resolver = LanguageResolver::default();
        let available = codes(&["ru", "de"]);
        let picked = resolver.resolve(None, None, &available).unwrap();
        assert!(available.contains(&picked));
    }

    #[test]
    fn test_host_locale_normalization() {
        assert_eq!(LanguageCode::from_host_locale("en_US.UTF-8"), Some(LanguageCode::new("en-US")));
        assert_eq!(LanguageCode::from_host_locale("de_DE@euro"), Some(LanguageCode::new("de-DE")));
        assert_eq!(LanguageCode::from_host_locale("fr-CA"), Some(LanguageCode::new("fr-CA")));
        assert_eq!(LanguageCode::from_host_locale("C"), None);
        assert_eq!(LanguageCode::from_host_locale("POSIX"), None);
        assert_eq!(LanguageCode::from_host_locale(""), None);
    }
}
