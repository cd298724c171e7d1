//! Test context with a temporary translations directory

use std::path::{Path, PathBuf};
use std::sync::Once;

use lingokit::config::I18nConfig;
use lingokit::i18n::{DirectoryResources, FixedLocale};
use lingokit::{Localizer, Result};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Owns a temporary directory of `<code>.json` files
pub struct TestContext {
    pub temp_dir: tempfile::TempDir,
}

impl TestContext {
    /// Create an empty translations directory
    pub fn new() -> std::io::Result<Self> {
        init_test_env();
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Create a directory holding the given `(code, json)` files
    pub fn with_languages(languages: &[(&str, &str)]) -> std::io::Result<Self> {
        let ctx = Self::new()?;
        for (code, json) in languages {
            ctx.write_language(code, json)?;
        }
        Ok(ctx)
    }

    /// Write or replace the file for `code`
    pub fn write_language(&self, code: &str, json: &str) -> std::io::Result<PathBuf> {
        let path = self.path().join(format!("{}.json", code));
        std::fs::write(&path, json)?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn resources(&self) -> DirectoryResources {
        DirectoryResources::new(self.path())
    }

    /// Localizer over this directory with no host locale involved
    pub fn localizer(&self, preferred: Option<&str>) -> Result<Localizer> {
        Localizer::builder(self.resources())
            .preferred_opt(preferred.map(Into::into))
            .locale_hint(FixedLocale::none())
            .build()
    }

    /// Configuration pointing at this directory
    pub fn config(&self) -> I18nConfig {
        I18nConfig {
            resource_dir: self.path().display().to_string(),
            use_system_locale: false,
            ..I18nConfig::default()
        }
    }
}
