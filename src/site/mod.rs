//! Page rendering.
//!
//! Pages are plain HTML strings built from a `PageContext`. The context is
//! created once per request from the resolved locale and passed down
//! explicitly; nothing here reads the locale from anywhere else.

mod html;
mod pages;
mod projects;

pub use html::escape_html;
pub use pages::{render_not_found, render_page, render_redirect};
pub use projects::{Project, PROJECTS};

use crate::i18n::{Catalogs, Locale, MessageCatalog};
use crate::routing::LinkBuilder;

/// Everything a page needs to render for one request.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: Locale,

    /// Path of the page being rendered (as requested, including the base path)
    pub current_path: &'a str,

    pub links: &'a LinkBuilder,

    /// Catalog of `locale`
    pub messages: &'a MessageCatalog,
}

impl<'a> PageContext<'a> {
    pub fn new(
        locale: Locale,
        current_path: &'a str,
        links: &'a LinkBuilder,
        catalogs: &'a Catalogs,
    ) -> Self {
        Self {
            locale,
            current_path,
            links,
            messages: catalogs.get(locale),
        }
    }

    /// Translated and HTML-escaped message.
    pub fn t(&self, key: &str) -> String {
        escape_html(self.messages.t(key))
    }
}
