use std::sync::Arc;

use anyhow::Result;
use soglab_site::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("soglab_site=info".parse()?),
        )
        .init();

    info!("Starting Soglab site server");

    let config = config::Config::from_env()?;

    // Catalogs must load before the listener opens; a missing one is fatal
    let state = Arc::new(server::AppState::load(&config).await?);

    server::serve(&config, state).await
}
