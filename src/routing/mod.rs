//! Locale-prefixed routing.
//!
//! Every page lives at `{base}/{locale}{canonical}`. The resolver turns an
//! incoming path into a validated locale (or a redirect / NotFound), and the
//! link builder produces every internal link, including the language switch.
//!
//! The locale segment is always the first segment below the base path. With
//! no base path configured that is simply the first segment of the path.

mod base_path;
mod links;
mod resolver;
mod route;

pub use base_path::BasePath;
pub use links::{LanguageLink, LinkBuilder, NavLink};
pub use resolver::{LocaleResolver, Resolution, ResolvedPath};
pub use route::{Route, RouteTable};

use thiserror::Error;

/// Configuration errors in the base path or the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("invalid base path '{path}': {reason}")]
    InvalidBasePath { path: String, reason: &'static str },

    #[error("invalid path '{path}' for route '{route}': {reason}")]
    InvalidRoute {
        route: Route,
        path: String,
        reason: &'static str,
    },

    #[error("route '{0}' is defined more than once")]
    DuplicateRoute(Route),

    #[error("path '{0}' is mapped to more than one route")]
    DuplicatePath(String),

    #[error("route '{0}' has no path")]
    MissingRoute(Route),
}
