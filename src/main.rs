// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::graph_service::GraphService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::http_repository::HttpObservationRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings()?;
    let options = settings.chart.to_options()?;
    let addr = settings.server.socket_addr()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpObservationRepository::new(
        settings.frontend.origin.clone(),
        settings.frontend.config_path.clone(),
    ));

    // Create services (application layer)
    let graph_service = GraphService::new(repository, options);

    let state = Arc::new(AppState { graph_service });
    let router = build_router(state, &settings.frontend);

    tracing::info!("Starting telemetry-graph service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
