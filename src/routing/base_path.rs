use std::fmt;

use crate::i18n::LocaleRegistry;
use crate::routing::RoutingError;

/// Fixed, non-locale prefix the whole site is served under (e.g. `/soglab`).
///
/// Stored normalized: either empty (served at the domain root) or a leading
/// slash followed by one or more non-empty segments, without a trailing slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// No prefix: the site is served at `/`.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse and normalize a configured prefix.
    ///
    /// `""`, `"/"` → root; `"soglab"`, `"/soglab/"` → `/soglab`.
    /// A segment equal to a locale code is rejected because it would make
    /// the locale segment ambiguous.
    pub fn parse(raw: &str) -> Result<Self, RoutingError> {
        let invalid = |reason| RoutingError::InvalidBasePath {
            path: raw.to_string(),
            reason,
        };

        let trimmed = raw.trim();
        if trimmed.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
            return Err(invalid("must not contain whitespace, '?' or '#'"));
        }

        let inner = trimmed.trim_start_matches('/').trim_end_matches('/');
        if inner.is_empty() {
            return Ok(Self::root());
        }

        let registry = LocaleRegistry::get();
        for segment in inner.split('/') {
            if segment.is_empty() {
                return Err(invalid("contains an empty segment"));
            }
            if segment == "." || segment == ".." {
                return Err(invalid("contains a relative segment"));
            }
            if registry.get_by_code(segment).is_some() {
                return Err(invalid("contains a locale code as a segment"));
            }
        }

        Ok(Self(format!("/{}", inner)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The part of `path` below this prefix.
    ///
    /// Returns `Some("")` for the prefix itself, `Some("/...")` for paths
    /// under it, and `None` when `path` lies outside the prefix. With the
    /// root prefix every path is returned unchanged.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(path);
        }

        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Prefix an absolute path (one starting with `/`).
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_root_forms() {
        for raw in ["", "/", "  ", "//"] {
            assert!(BasePath::parse(raw).unwrap().is_root(), "{raw:?}");
        }
    }

    #[test]
    fn test_parse_normalizes_slashes() {
        for raw in ["soglab", "/soglab", "/soglab/", "soglab/"] {
            assert_eq!(BasePath::parse(raw).unwrap().as_str(), "/soglab", "{raw:?}");
        }
        assert_eq!(BasePath::parse("/a/b").unwrap().as_str(), "/a/b");
    }

    #[test]
    fn test_parse_rejects_bad_prefixes() {
        for raw in ["/a//b", "/a?b", "/a#b", "/a b", "/../x", "/ko", "/site/en"] {
            assert!(BasePath::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    // ==================== Strip Tests ====================

    #[test]
    fn test_strip_root_returns_path() {
        let base = BasePath::root();
        assert_eq!(base.strip("/ko/about"), Some("/ko/about"));
        assert_eq!(base.strip("/"), Some("/"));
    }

    #[test]
    fn test_strip_prefix() {
        let base = BasePath::parse("/soglab").unwrap();
        assert_eq!(base.strip("/soglab"), Some(""));
        assert_eq!(base.strip("/soglab/"), Some("/"));
        assert_eq!(base.strip("/soglab/ko/about"), Some("/ko/about"));
    }

    #[test]
    fn test_strip_requires_segment_boundary() {
        let base = BasePath::parse("/soglab").unwrap();
        assert_eq!(base.strip("/soglabs/ko"), None);
        assert_eq!(base.strip("/ko"), None);
        assert_eq!(base.strip("/"), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(BasePath::root().join("/ko"), "/ko");
        assert_eq!(BasePath::parse("soglab").unwrap().join("/ko"), "/soglab/ko");
    }
}
