//! Locale type: a code that has been validated against the registry.
//!
//! A `Locale` can only be obtained through `from_code`, the constants, or
//! the registry default, so holding one means the locale is supported.

use std::fmt;

use thiserror::Error;

use crate::i18n::{LocaleConfig, LocaleRegistry};

/// Returned when a code does not name an enabled locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: '{code}'")]
pub struct UnsupportedLocale {
    pub code: String,
}

/// A validated, supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const KOREAN: Locale = Locale { code: "ko" };

    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code names an enabled locale (exact match)
    /// * `Err(UnsupportedLocale)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, UnsupportedLocale> {
        LocaleRegistry::get()
            .get_enabled(code)
            .map(|config| Locale { code: config.code })
            .ok_or_else(|| UnsupportedLocale {
                code: code.to_string(),
            })
    }

    /// The locale bare requests are redirected to.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// Every enabled locale, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Locale built through `from_code`, the constants, or `default_locale`.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
