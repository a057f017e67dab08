//! Catalog consistency validation.
//!
//! Compares each locale's catalog against the default locale's catalog so
//! that missing translations and broken `{placeholder}` names are reported
//! at startup instead of surfacing as raw keys on a page.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::i18n::{Catalogs, Locale, MessageCatalog};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the candidate catalog must define but does not
    pub errors: Vec<String>,

    /// Non-critical findings (extra keys, empty values, placeholder drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate `candidate` against `reference`.
    ///
    /// This function checks that:
    /// - every reference key exists in the candidate (error)
    /// - the candidate has no keys the reference lacks (warning)
    /// - no candidate message is empty (warning)
    /// - each message uses the same `{placeholders}` as the reference (warning)
    pub fn validate(reference: &MessageCatalog, candidate: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (key, reference_text) in reference.iter() {
            let Some(text) = candidate.get(key) else {
                report.errors.push(format!(
                    "Missing key '{}' in '{}' catalog",
                    key,
                    candidate.locale()
                ));
                continue;
            };

            if text.trim().is_empty() {
                report.warnings.push(format!(
                    "Empty message for '{}' in '{}' catalog",
                    key,
                    candidate.locale()
                ));
            }

            let expected = Self::extract_placeholders(reference_text);
            let actual = Self::extract_placeholders(text);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}': '{}' has {:?}, '{}' has {:?}",
                    key,
                    reference.locale(),
                    expected,
                    candidate.locale(),
                    actual
                ));
            }
        }

        for key in candidate.keys() {
            if reference.get(key).is_none() {
                report.warnings.push(format!(
                    "Extra key '{}' in '{}' catalog",
                    key,
                    candidate.locale()
                ));
            }
        }

        report
    }

    /// Validate every non-default catalog against the default locale's.
    pub fn validate_all(catalogs: &Catalogs) -> Vec<(Locale, ValidationReport)> {
        let reference = catalogs.get(Locale::default_locale());

        catalogs
            .iter()
            .filter(|catalog| catalog.locale() != reference.locale())
            .map(|catalog| (catalog.locale(), Self::validate(reference, catalog)))
            .collect()
    }

    /// Extract the set of `{name}` placeholders used in a message
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
