// Application state for HTTP handlers
use crate::application::graph_service::GraphService;

#[derive(Clone)]
pub struct AppState {
    pub graph_service: GraphService,
}
