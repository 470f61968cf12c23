pub mod audio;
pub mod health;

use crate::models::ServiceInfo;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Basic API information.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service metadata", body = ServiceInfo))
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: state.config.project_name.clone(),
        version: state.config.version.clone(),
        status: "running".to_string(),
        docs: "/docs".to_string(),
        health: "/health".to_string(),
    })
}
