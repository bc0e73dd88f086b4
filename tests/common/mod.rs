// Shared test helpers: fixtures and a mock Nexus API on an ephemeral port
#![allow(dead_code)]

use axum::{Json, Router, extract::Path, http::StatusCode, response::IntoResponse, routing::get};
use chrono::{DateTime, TimeZone, Utc};
use nexus_board::config::AppConfig;
use nexus_board::models::*;

pub fn point(timestamp: DateTime<Utc>, up_count: u64, down_count: u64, latency: f64) -> HealthPoint {
    HealthPoint {
        timestamp,
        up_count,
        down_count,
        latency,
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn history(hourly: Vec<HealthPoint>, daily: Vec<HealthPoint>) -> UptimeHistory {
    UptimeHistory {
        service_id: "svc-1".into(),
        hourly,
        daily,
    }
}

pub fn service(id: &str, name: &str, group: &str, public: bool, auth_required: bool) -> Service {
    Service {
        id: id.into(),
        name: name.into(),
        url: format!("http://{}.lan", id),
        description: String::new(),
        icon: String::new(),
        group: group.into(),
        order: 0,
        public,
        auth_required,
        new_tab: false,
    }
}

pub fn board_config(base_url: &str) -> AppConfig {
    AppConfig::load_from_str(&format!(
        r#"
[server]
port = 8090
host = "127.0.0.1"

[upstream]
base_url = "{}"
timeout_secs = 5

[display]
utc_offset_minutes = 0
"#,
        base_url
    ))
    .unwrap()
}

/// Upstream fixture: "web" is up right now, "broken" answers 500, "garbled" is missing fields.
pub fn mock_nexus() -> Router {
    Router::new()
        .route(
            "/api/services",
            get(|| async {
                Json(vec![
                    service("grafana", "Grafana", "Monitoring", true, false),
                    service("jellyfin", "Jellyfin", "Media", true, false),
                    service("vault", "Vault", "Monitoring", true, true),
                    service("router", "Router", "Network", false, false),
                ])
            }),
        )
        .route(
            "/api/groups",
            get(|| async { Json(vec!["Media", "Monitoring", "Network"]) }),
        )
        .route("/api/services/{id}/uptime", get(mock_uptime))
}

async fn mock_uptime(Path(id): Path<String>) -> impl IntoResponse {
    match id.as_str() {
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "garbled" => Json(serde_json::json!({ "service_id": "garbled" })).into_response(),
        _ => {
            let now = Utc::now();
            Json(UptimeHistory {
                service_id: id,
                hourly: vec![point(now, 5, 0, 100.0), point(now, 0, 3, 300.0)],
                daily: vec![point(now, 10, 0, 120.0), point(now, 8, 2, 80.0)],
            })
            .into_response()
        }
    }
}

/// Serves `router` on 127.0.0.1:0 and returns its base url.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
