use crate::i18n::Locale;
use crate::routing::BasePath;

/// A request path whose locale segment has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub locale: Locale,

    /// Everything after the locale segment, always starting with `/`
    /// (`/` for the locale root).
    pub remainder: String,
}

/// Outcome of resolving one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render with this locale bound for the rest of the request.
    Resolved(ResolvedPath),

    /// No locale segment at all: send the client to the default locale.
    Redirect(String),

    /// Unsupported locale segment, or a path outside the base path.
    NotFound,
}

/// Decides the active locale for every incoming request path.
#[derive(Debug, Clone, Default)]
pub struct LocaleResolver {
    base: BasePath,
}

impl LocaleResolver {
    pub fn new(base: BasePath) -> Self {
        Self { base }
    }

    /// Where bare requests are sent: `{base}/{default}`.
    pub fn default_target(&self) -> String {
        self.base.join(&format!("/{}", Locale::default_locale()))
    }

    /// Resolve a raw request path (query string excluded).
    ///
    /// The first segment below the base path must be a supported locale,
    /// matched exactly. There is no fallback: anything else is NotFound,
    /// except the bare root which redirects to the default locale.
    pub fn resolve(&self, path: &str) -> Resolution {
        let Some(below_base) = self.base.strip(path) else {
            return Resolution::NotFound;
        };

        if below_base.is_empty() || below_base == "/" {
            return Resolution::Redirect(self.default_target());
        }

        match split_locale_segment(below_base) {
            Some((locale, "")) => Resolution::Resolved(ResolvedPath {
                locale,
                remainder: "/".to_string(),
            }),
            Some((locale, rest)) => Resolution::Resolved(ResolvedPath {
                locale,
                remainder: rest.to_string(),
            }),
            None => Resolution::NotFound,
        }
    }
}

/// Split a path below the base path into its locale segment and the rest.
///
/// Exactly one leading `/` is stripped and the segment up to the next `/`
/// must be a supported locale. The rest is either empty or starts with `/`.
/// Both request resolution and link building locate the locale this way.
pub(crate) fn split_locale_segment(below_base: &str) -> Option<(Locale, &str)> {
    let segments = below_base.strip_prefix('/')?;

    let (candidate, rest) = match segments.find('/') {
        Some(index) => segments.split_at(index),
        None => (segments, ""),
    };

    Locale::from_code(candidate).ok().map(|locale| (locale, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolved(locale: Locale, remainder: &str) -> Resolution {
        Resolution::Resolved(ResolvedPath {
            locale,
            remainder: remainder.to_string(),
        })
    }

    // ==================== Root Prefix Tests ====================

    #[test]
    fn test_supported_locales_resolve() {
        let resolver = LocaleResolver::default();
        for locale in Locale::all() {
            assert_eq!(resolver.resolve(&format!("/{locale}")), resolved(locale, "/"));
        }
    }

    #[test]
    fn test_remainder_is_kept() {
        let resolver = LocaleResolver::default();
        assert_eq!(resolver.resolve("/en/projects"), resolved(Locale::ENGLISH, "/projects"));
        assert_eq!(resolver.resolve("/ko/about"), resolved(Locale::KOREAN, "/about"));
        assert_eq!(resolver.resolve("/ko/"), resolved(Locale::KOREAN, "/"));
        assert_eq!(resolver.resolve("/en/a/b/"), resolved(Locale::ENGLISH, "/a/b/"));
    }

    #[test]
    fn test_unsupported_locale_is_not_found() {
        let resolver = LocaleResolver::default();
        for path in ["/fr", "/KO", "/en-US/projects", "/projects", "//ko", "/e"] {
            assert_eq!(resolver.resolve(path), Resolution::NotFound, "{path}");
        }
    }

    #[test]
    fn test_bare_root_redirects_to_default() {
        let resolver = LocaleResolver::default();
        assert_eq!(resolver.resolve("/"), Resolution::Redirect("/ko".into()));
        assert_eq!(resolver.resolve(""), Resolution::Redirect("/ko".into()));
    }

    #[test]
    fn test_redirect_target_is_stable() {
        let resolver = LocaleResolver::default();
        let Resolution::Redirect(target) = resolver.resolve("/") else {
            panic!("expected redirect");
        };
        assert_eq!(resolver.resolve(&target), resolved(Locale::KOREAN, "/"));
    }

    #[test]
    fn test_split_locale_segment() {
        assert_eq!(split_locale_segment("/en"), Some((Locale::ENGLISH, "")));
        assert_eq!(split_locale_segment("/ko/about/"), Some((Locale::KOREAN, "/about/")));
        assert_eq!(split_locale_segment("//ko/about"), None);
        assert_eq!(split_locale_segment("ko/about"), None);
        assert_eq!(split_locale_segment("/"), None);
    }

    #[test]
    fn test_relative_path_is_not_found() {
        assert_eq!(LocaleResolver::default().resolve("ko"), Resolution::NotFound);
    }

    // ==================== Base Path Tests ====================

    fn with_base() -> LocaleResolver {
        LocaleResolver::new(BasePath::parse("/soglab").unwrap())
    }

    #[test]
    fn test_base_root_redirects() {
        let resolver = with_base();
        assert_eq!(resolver.resolve("/soglab"), Resolution::Redirect("/soglab/ko".into()));
        assert_eq!(resolver.resolve("/soglab/"), Resolution::Redirect("/soglab/ko".into()));
    }

    #[test]
    fn test_locale_follows_base() {
        let resolver = with_base();
        assert_eq!(
            resolver.resolve("/soglab/en/about"),
            resolved(Locale::ENGLISH, "/about")
        );
        assert_eq!(resolver.resolve("/soglab/fr"), Resolution::NotFound);
    }

    #[test]
    fn test_paths_outside_base_are_not_found() {
        let resolver = with_base();
        for path in ["/", "/ko", "/en/projects", "/soglabx/ko"] {
            assert_eq!(resolver.resolve(path), Resolution::NotFound, "{path}");
        }
    }

    #[test]
    fn test_base_redirect_is_stable() {
        let resolver = with_base();
        let target = resolver.default_target();
        assert_eq!(resolver.resolve(&target), resolved(Locale::KOREAN, "/"));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_unsupported_segment_is_not_found(
            segment in "[A-Za-z0-9_-]{1,8}",
            tail in "(/[a-z0-9]{1,6}){0,3}",
        ) {
            prop_assume!(Locale::from_code(&segment).is_err());
            let resolver = LocaleResolver::default();
            prop_assert_eq!(resolver.resolve(&format!("/{segment}{tail}")), Resolution::NotFound);
        }

        #[test]
        fn prop_supported_locale_resolves_with_remainder(
            index in 0usize..2,
            tail in "(/[a-z0-9]{1,6}){0,3}",
        ) {
            let locale = Locale::all()[index];
            let resolver = LocaleResolver::default();
            let expected = if tail.is_empty() { "/".to_string() } else { tail.clone() };
            prop_assert_eq!(
                resolver.resolve(&format!("/{locale}{tail}")),
                resolved(locale, &expected)
            );
        }
    }
}
