use crate::i18n::Locale;
use crate::routing::resolver::split_locale_segment;
use crate::routing::{BasePath, Route, RouteTable};

/// One entry of the header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub href: String,
    /// The current page is this route
    pub active: bool,
}

/// One entry of the language switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLink {
    pub locale: Locale,
    pub href: String,
    /// This is the locale of the current page
    pub active: bool,
}

/// Builds locale-prefixed internal links.
///
/// All methods are total: a path without a recognizable locale segment
/// degrades to the default locale instead of producing a malformed link.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base: BasePath,
    routes: RouteTable,
}

impl LinkBuilder {
    pub fn new(base: BasePath, routes: RouteTable) -> Self {
        Self { base, routes }
    }

    pub fn base_path(&self) -> &BasePath {
        &self.base
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// `{base}/{locale}{canonical}`, with the root path collapsing to
    /// `{base}/{locale}` (never a trailing slash, never a doubled one).
    pub fn localized(&self, locale: Locale, canonical: &str) -> String {
        let canonical = canonical.trim_start_matches('/');
        if canonical.is_empty() {
            self.base.join(&format!("/{}", locale))
        } else {
            self.base.join(&format!("/{}/{}", locale, canonical))
        }
    }

    /// Link to a route under a locale.
    pub fn route_href(&self, locale: Locale, route: Route) -> String {
        self.localized(locale, self.routes.path(route))
    }

    /// Locale of the current path, or the default locale when the path has
    /// no supported locale segment.
    pub fn current_locale(&self, current: &str) -> Locale {
        let (path, _) = split_suffix(current);
        self.split_locale(path).0.unwrap_or_default()
    }

    /// Re-localize `current` under `target`.
    ///
    /// Only the locale segment changes; later segments, the query string and
    /// the fragment are kept as they are. When `current` has no locale
    /// segment the target locale is inserted in front of its path.
    pub fn switch_locale(&self, current: &str, target: Locale) -> String {
        let (path, suffix) = split_suffix(current);

        let switched = match self.split_locale(path) {
            (Some(_), rest) => self.base.join(&format!("/{}{}", target, rest)),
            (None, rest) => self.localized(target, rest),
        };

        format!("{}{}", switched, suffix)
    }

    /// Header navigation for the page at `current`.
    pub fn nav_links(&self, current: &str) -> Vec<NavLink> {
        let locale = self.current_locale(current);
        let (path, _) = split_suffix(current);
        let trimmed = path.trim_end_matches('/');

        self.routes
            .iter()
            .map(|(route, _)| {
                let href = self.route_href(locale, route);
                let active = href == trimmed;
                NavLink { route, href, active }
            })
            .collect()
    }

    /// Language switch entries for the page at `current`.
    pub fn language_links(&self, current: &str) -> Vec<LanguageLink> {
        let current_locale = self.current_locale(current);

        Locale::all()
            .into_iter()
            .map(|locale| LanguageLink {
                locale,
                href: self.switch_locale(current, locale),
                active: locale == current_locale,
            })
            .collect()
    }

    /// Split `path` into its locale (if the segment after the base path is
    /// one) and the rest of the path after that segment.
    ///
    /// A path that does not start with the base path is treated as if it
    /// were relative to it.
    fn split_locale<'a>(&self, path: &'a str) -> (Option<Locale>, &'a str) {
        let below_base = self.base.strip(path).unwrap_or(path);

        match split_locale_segment(below_base) {
            Some((locale, rest)) => (Some(locale), rest),
            None => (None, below_base),
        }
    }
}

/// Split off the query string and fragment: `/a?b#c` → (`/a`, `?b#c`).
fn split_suffix(current: &str) -> (&str, &str) {
    match current.find(['?', '#']) {
        Some(index) => current.split_at(index),
        None => (current, ""),
    }
}
