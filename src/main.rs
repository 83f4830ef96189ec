// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use ipma_warnings::application::warnings_service::WarningsService;
use ipma_warnings::domain::about::APP_TITLE;
use ipma_warnings::infrastructure::config::load_app_config;
use ipma_warnings::infrastructure::feed_client::IpmaFeedClient;
use ipma_warnings::presentation::app_state::{AppState, SessionStore};
use ipma_warnings::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create feed client (infrastructure layer)
    let feed = Arc::new(IpmaFeedClient::new(
        config.feed.url.clone(),
        config.feed.timeout(),
    )?);

    // Create application state
    let state = Arc::new(AppState {
        warnings_service: WarningsService::new(feed),
        sessions: SessionStore::new(config.observations.validation_mode()),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting {} on {} (feed: {})", APP_TITLE, addr, config.feed.url);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
