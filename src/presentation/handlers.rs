// HTTP request handlers
use crate::application::error::GraphError;
use crate::domain::chart::ChartData;
use crate::domain::request::DataRequest;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Host, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the chart for the requested path and query
pub async fn render_graph(
    Host(host): Host,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartData>, GraphError> {
    let request = DataRequest::new(host, uri.path(), query);
    let chart = state.graph_service.render(&request).await?;
    Ok(Json(chart))
}

impl GraphError {
    fn status_code(&self) -> StatusCode {
        match self {
            GraphError::ConfigFetch(_) | GraphError::DataFetch(_) => StatusCode::BAD_GATEWAY,
            GraphError::MissingPeriod | GraphError::UnknownPeriod(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GraphError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        // Bad query strings are the caller's problem, upstream failures are ours
        if status.is_client_error() {
            tracing::warn!("Rejected graph request: {}", self);
        } else {
            tracing::error!("Failed to render graph: {:#}", anyhow::Error::from(self));
        }

        (status, message).into_response()
    }
}
