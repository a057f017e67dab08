//! Locale registry: Single source of truth for all supported locales.
//!
//! The supported set and the default locale are fixed when the registry is
//! first accessed and never change for the lifetime of the process. Access
//! goes through a `OnceLock` so every thread sees the same immutable table.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// URL segment and catalog file stem (e.g., "ko", "en")
    pub code: &'static str,

    /// Native name shown in the language switch (e.g., "한국어", "English")
    pub native_name: &'static str,

    /// Whether bare requests are redirected to this locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale is served
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is exact: "KO" or "ko-KR" do not match "ko".
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple defaults are
    /// defined (this indicates a configuration error in the static table).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default && locale.enabled)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Get a locale configuration by its code, if that locale is served.
    pub fn get_enabled(&self, code: &str) -> Option<&LocaleConfig> {
        self.get_by_code(code).filter(|locale| locale.enabled)
    }
}

/// Default locale configurations: Korean (default) and English.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "ko",
            native_name: "한국어",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}
