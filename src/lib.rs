//! Soglab company site: locale-prefixed pages served over HTTP.

pub mod config;
pub mod export;
pub mod i18n;
pub mod routing;
pub mod server;
pub mod site;
