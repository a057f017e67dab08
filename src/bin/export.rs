//! Export binary - renders every localized page to static HTML files
//!
//! Usage:
//!   cargo run --bin export                 # Write to EXPORT_DIR (defaults to out/)
//!   cargo run --bin export -- dist/site    # Write to an explicit directory
//!
//! Optional environment variables:
//! - BASE_PATH (deployment sub-path, e.g. /soglab)
//! - MESSAGES_DIR (defaults to messages)
//! - EXPORT_DIR (defaults to out)

use std::path::PathBuf;

use anyhow::Result;
use soglab_site::{config::Config, export, server::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("soglab_site=info".parse()?)
                .add_directive("export=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.export_dir.clone());

    info!("Exporting site to {}", out_dir.display());

    let state = AppState::load(&config).await?;
    let summary = export::export_site(&state, &out_dir).await?;

    println!("Exported {} files to {}", summary.files.len(), out_dir.display());
    Ok(())
}
