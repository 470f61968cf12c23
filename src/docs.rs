use crate::handlers;
use crate::models::{
    AnalysisResult, AudioServiceStatus, AudioUploadForm, HealthStatus, Pong, ServiceInfo,
};
use crate::AppState;
use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(description = "Backend API for Bigkas - Vocal Confidence Analysis Platform"),
    paths(
        handlers::root,
        handlers::health::health_check,
        handlers::health::ping,
        handlers::audio::analyze_audio,
        handlers::audio::audio_service_status,
    ),
    components(schemas(
        AnalysisResult,
        AudioUploadForm,
        AudioServiceStatus,
        HealthStatus,
        Pong,
        ServiceInfo
    )),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "audio", description = "Audio upload and analysis")
    )
)]
struct ApiDoc;

/// Swagger UI at `/docs`, ReDoc at `/redoc`.
pub fn routes(title: &str, version: &str) -> Router<Arc<AppState>> {
    let mut openapi = ApiDoc::openapi();
    openapi.info.title = title.to_string();
    openapi.info.version = version.to_string();

    Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi))
}
