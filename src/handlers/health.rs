//! Liveness endpoints polled by the hosting platform.

use crate::models::{HealthStatus, Pong};
use crate::AppState;
use axum::{routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ping", get(ping))
}

/// Confirm the API is operational.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

/// Quick connectivity test.
#[utoipa::path(
    get,
    path = "/health/ping",
    tag = "health",
    responses((status = 200, description = "Pong", body = Pong))
)]
pub async fn ping() -> Json<Pong> {
    Json(Pong {
        ping: "pong".to_string(),
    })
}
