//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and the default
//! - `locale`: Validated `Locale` type
//! - `catalog`: Per-locale message catalogs loaded from `messages/{code}.json`
//! - `validator`: Cross-locale catalog consistency checks
//! - `metrics`: Locale resolution counters
//!
//! # Example
//!
//! ```rust,ignore
//! use soglab_site::i18n::{Catalogs, Locale};
//!
//! let catalogs = Catalogs::load_all(Path::new("messages")).await?;
//! let english = Locale::from_code("en")?;
//! let title = catalogs.get(english).t("hero.title");
//! ```

mod catalog;
mod locale;
mod metrics;
mod registry;
mod validator;

pub use catalog::{CatalogError, Catalogs, MessageCatalog};
pub use locale::{Locale, UnsupportedLocale};
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use validator::{CatalogValidator, ValidationReport};
