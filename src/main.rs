//! taskira - HTTP Server Entry Point
//!
//! Starts the HTTP server that exposes the task CRUD API.

use taskira::{api, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskira=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: store={} data_dir={}",
        config.store_type.as_str(),
        config.data_dir.display()
    );

    // Start HTTP server
    api::serve(config).await?;

    Ok(())
}
