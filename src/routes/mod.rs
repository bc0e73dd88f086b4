// HTTP routes: landing page, uptime views, stats

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::upstream::NexusClient;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) client: Arc<NexusClient>,
    pub(crate) config: AppConfig,
}

pub fn app(client: Arc<NexusClient>, config: AppConfig) -> Router {
    let state = AppState { client, config };
    Router::new()
        .route("/", get(|| async { "Nexus board" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/health", get(http::health_handler)) // GET /api/health
        .route("/api/dashboard", get(http::dashboard_handler)) // GET /api/dashboard?q=
        .route("/api/stats", get(http::stats_handler)) // GET /api/stats
        .route("/api/groups", get(http::groups_handler)) // GET /api/groups
        .route(
            "/api/services/{id}/uptime/view",
            get(http::uptime_view_handler),
        ) // GET /api/services/{id}/uptime/view?granularity=
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
