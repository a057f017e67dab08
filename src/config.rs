use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::routing::BasePath;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Deployment sub-path prefix (empty when served at the domain root)
    pub base_path: BasePath,

    // Message catalogs ({code}.json per locale)
    pub messages_dir: PathBuf,

    // Static export output
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_path = std::env::var("BASE_PATH").unwrap_or_default();

        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", value))?,
                Err(_) => 8080,
            },

            base_path: BasePath::parse(&base_path).context("BASE_PATH is invalid")?,

            messages_dir: std::env::var("MESSAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("messages")),

            export_dir: std::env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("out")),
        })
    }
}
