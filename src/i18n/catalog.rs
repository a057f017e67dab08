//! Message catalogs: per-locale translation tables loaded from JSON.
//!
//! Each enabled locale has a `{code}.json` file in the messages directory.
//! Nested objects are flattened into dotted keys, so
//! `{"nav": {"home": "Home"}}` is looked up as `nav.home`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::Locale;

/// Errors raised while loading catalogs. All of them are configuration
/// defects and abort startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("message catalog for '{locale}' could not be read from {}", .path.display())]
    Missing {
        locale: Locale,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("message catalog for '{locale}' is not valid JSON")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("message catalog for '{locale}' must be a JSON object at the top level")]
    NotAnObject { locale: Locale },

    #[error("message catalog for '{locale}' has a non-text value at '{key}'")]
    InvalidValue { locale: Locale, key: String },

    #[error("no message catalog loaded for '{0}'")]
    Incomplete(Locale),
}

/// Translation table for one locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: Locale,
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Parse a catalog from JSON text.
    ///
    /// Strings, numbers and booleans become messages; arrays and nulls are
    /// rejected so that a typo in the file cannot silently drop a key.
    pub fn from_json_str(locale: Locale, json: &str) -> Result<Self, CatalogError> {
        let root: Value =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { locale, source })?;

        let Value::Object(map) = root else {
            return Err(CatalogError::NotAnObject { locale });
        };

        let mut messages = BTreeMap::new();
        for (key, value) in map {
            flatten_into(locale, key, value, &mut messages)?;
        }

        Ok(Self { locale, messages })
    }

    /// Read `{dir}/{code}.json` for the given locale.
    pub async fn load(dir: &Path, locale: Locale) -> Result<Self, CatalogError> {
        let path = dir.join(format!("{}.json", locale.code()));
        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::Missing {
                locale,
                path: path.clone(),
                source,
            })?;

        let catalog = Self::from_json_str(locale, &json)?;
        debug!(
            "Loaded {} messages for '{}' from {}",
            catalog.len(),
            locale,
            path.display()
        );
        Ok(catalog)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Look up a message, falling back to the key itself when it is missing.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(message) => message,
            None => {
                warn!(locale = %self.locale, key, "missing message");
                key
            }
        }
    }

    /// Look up a message and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut message = self.t(key).to_string();
        for (name, value) in args {
            message = message.replace(&format!("{{{}}}", name), value);
        }
        message
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten_into(
    locale: Locale,
    key: String,
    value: Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        Value::Object(children) => {
            for (child, value) in children {
                flatten_into(locale, format!("{}.{}", key, child), value, out)?;
            }
        }
        Value::String(text) => {
            out.insert(key, text);
        }
        Value::Number(number) => {
            out.insert(key, number.to_string());
        }
        Value::Bool(flag) => {
            out.insert(key, flag.to_string());
        }
        Value::Null | Value::Array(_) => {
            return Err(CatalogError::InvalidValue { locale, key });
        }
    }
    Ok(())
}

/// One catalog per enabled locale.
///
/// Construction fails unless every enabled locale has a catalog, so `get`
/// never has to deal with a missing locale at request time.
#[derive(Debug, Clone)]
pub struct Catalogs {
    catalogs: Vec<MessageCatalog>,
}

impl Catalogs {
    /// Load the catalog of every enabled locale from `dir`.
    pub async fn load_all(dir: &Path) -> Result<Self, CatalogError> {
        let mut catalogs = Vec::new();
        for locale in Locale::all() {
            catalogs.push(MessageCatalog::load(dir, locale).await?);
        }
        Self::from_catalogs(catalogs)
    }

    /// Build from already parsed catalogs, checking completeness.
    pub fn from_catalogs(catalogs: Vec<MessageCatalog>) -> Result<Self, CatalogError> {
        for locale in Locale::all() {
            if !catalogs.iter().any(|catalog| catalog.locale == locale) {
                return Err(CatalogError::Incomplete(locale));
            }
        }
        Ok(Self { catalogs })
    }

    /// # Panics
    /// Panics if `locale` has no catalog, which construction rules out for
    /// every enabled locale.
    pub fn get(&self, locale: Locale) -> &MessageCatalog {
        self.catalogs
            .iter()
            .find(|catalog| catalog.locale == locale)
            .expect("Catalogs holds a catalog for every enabled locale")
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageCatalog> {
        self.catalogs.iter()
    }
}
