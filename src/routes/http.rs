// GET handlers: version, health, dashboard, stats, groups, uptime view

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, Utc};
use serde::Deserialize;

use super::AppState;
use crate::config::DisplayZone;
use crate::dashboard::{self, Viewer};
use crate::models::{DashboardStats, Granularity};
use crate::upstream::FetchError;
use crate::version::{NAME, VERSION};
use crate::view::UptimeView;

#[derive(Debug, Deserialize)]
pub(super) struct DashboardParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct UptimeParams {
    #[serde(default)]
    granularity: Granularity,
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

pub(super) async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/dashboard: public landing page. The board holds no session, so viewers are anonymous.
pub(super) async fn dashboard_handler(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Response {
    match state.client.fetch_services().await {
        Ok(services) => {
            Json(dashboard::landing_page(services, Viewer::Anonymous, &params.q)).into_response()
        }
        Err(e) => upstream_failure("fetch_services", &e),
    }
}

/// GET /api/stats: counters over every upstream service, visible or not.
pub(super) async fn stats_handler(State(state): State<AppState>) -> Response {
    match state.client.fetch_services().await {
        Ok(services) => Json(DashboardStats::from_services(&services)).into_response(),
        Err(e) => upstream_failure("fetch_services", &e),
    }
}

/// GET /api/groups: group names as the upstream orders them.
pub(super) async fn groups_handler(State(state): State<AppState>) -> Response {
    match state.client.fetch_groups().await {
        Ok(groups) => Json(groups).into_response(),
        Err(e) => upstream_failure("fetch_groups", &e),
    }
}

/// GET /api/services/{id}/uptime/view: rendered heat-strip, or the failed state with 502.
pub(super) async fn uptime_view_handler(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(params): Query<UptimeParams>,
) -> Response {
    let result = state.client.fetch_uptime(&service_id).await;
    if let Err(e) = &result {
        tracing::warn!(service_id = %service_id, error = %e, "uptime fetch failed");
    }
    // clock is read after the fetch; the newest bucket must not be ahead of the window
    let granularity = params.granularity;
    let view = match state.config.display.zone() {
        DisplayZone::Named(tz) => {
            UptimeView::from_fetch(result, granularity, &Utc::now().with_timezone(&tz))
        }
        DisplayZone::Fixed(offset) => {
            UptimeView::from_fetch(result, granularity, &Utc::now().with_timezone(&offset))
        }
        DisplayZone::Local => UptimeView::from_fetch(result, granularity, &Local::now()),
    };
    let status = if view.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Json(view)).into_response()
}

fn upstream_failure(operation: &'static str, e: &FetchError) -> Response {
    tracing::warn!(operation, error = %e, "upstream fetch failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
        .into_response()
}
