// Route table and middleware stack
use crate::infrastructure::config::FrontendSettings;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, render_graph};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

/// `config.json` is served from `frontend.config_file` so the service can
/// act as its own page host. Every other path besides `/healthz` renders a
/// chart; the path and query are forwarded to the data source.
pub fn build_router(state: Arc<AppState>, frontend: &FrontendSettings) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route_service(&frontend.config_path, ServeFile::new(&frontend.config_file))
        .fallback(get(render_graph))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
