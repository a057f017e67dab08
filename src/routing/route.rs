use std::fmt;

use crate::routing::RoutingError;

/// Logical page identity, independent of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Projects,
    About,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Projects, Route::About];

    /// Stable identifier, also used as the `nav.*` catalog key.
    pub fn key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Projects => "projects",
            Route::About => "about",
        }
    }

    /// Canonical path used by the standard route table.
    pub fn default_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Projects => "/projects",
            Route::About => "/about",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Typed mapping from routes to canonical path templates.
///
/// Validated on construction: every route has exactly one path, paths are
/// unique, absolute, and carry no trailing slash (except `/` itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(Route, String)>,
}

impl RouteTable {
    pub fn new<I, P>(entries: I) -> Result<Self, RoutingError>
    where
        I: IntoIterator<Item = (Route, P)>,
        P: Into<String>,
    {
        let mut validated: Vec<(Route, String)> = Vec::new();

        for (route, path) in entries {
            let path = path.into();
            validate_path(route, &path)?;

            if validated.iter().any(|(existing, _)| *existing == route) {
                return Err(RoutingError::DuplicateRoute(route));
            }
            if validated.iter().any(|(_, existing)| *existing == path) {
                return Err(RoutingError::DuplicatePath(path));
            }
            validated.push((route, path));
        }

        for route in Route::ALL {
            if !validated.iter().any(|(existing, _)| *existing == route) {
                return Err(RoutingError::MissingRoute(route));
            }
        }

        // Navigation order follows Route::ALL regardless of input order.
        validated.sort_by_key(|(route, _)| Route::ALL.iter().position(|r| r == route));

        Ok(Self { entries: validated })
    }

    /// The site's table: `/`, `/projects`, `/about`.
    ///
    /// # Panics
    /// Panics if the built-in paths fail validation (covered by tests).
    pub fn standard() -> Self {
        Self::new(Route::ALL.map(|route| (route, route.default_path())))
            .expect("built-in route table should be valid")
    }

    /// Canonical path of a route.
    pub fn path(&self, route: Route) -> &str {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == route)
            .map(|(_, path)| path.as_str())
            .unwrap_or("/")
    }

    /// Find the route whose canonical path equals `path` (the part of a
    /// request path after the locale segment). A trailing slash is ignored.
    pub fn match_path(&self, path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        self.entries
            .iter()
            .find(|(_, candidate)| candidate == normalized)
            .map(|(route, _)| *route)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Route, &str)> {
        self.entries.iter().map(|(route, path)| (*route, path.as_str()))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_path(route: Route, path: &str) -> Result<(), RoutingError> {
    let invalid = |reason| RoutingError::InvalidRoute {
        route,
        path: path.to_string(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.contains(['?', '#']) {
        return Err(invalid("must not contain a query or fragment"));
    }
    if path == "/" {
        return Ok(());
    }
    if path.ends_with('/') {
        return Err(invalid("must not end with '/'"));
    }
    if path[1..].split('/').any(str::is_empty) {
        return Err(invalid("contains an empty segment"));
    }
    Ok(())
}
