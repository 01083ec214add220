//! Bookstore Server - Library Catalog
//!
//! Serves the read-only catalog REST API.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstore_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::Repository,
    server::{shutdown_signal, Server},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Bookstore Server v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::connect(&config.database)
        .await
        .with_context(|| {
            format!(
                "failed to connect to database {} at {}:{}",
                config.database.name, config.database.host, config.database.port
            )
        })?;

    tracing::info!("Connected to database");

    let server = Server::bind(&config.server).await?;
    let state = AppState::new(config, Arc::new(repository.clone()));
    let running = server.spawn(api::router(state))?;

    let served = running.shutdown_on(shutdown_signal()).await;

    tracing::info!("Closing database connections");
    repository.close().await;
    tracing::info!("Database connections closed");

    served
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "bookstore_server={},tower_http={}",
            logging.level, logging.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
