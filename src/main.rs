mod audio;
mod config;
mod cors;
mod docs;
mod error;
mod handlers;
mod models;
mod upload;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::{ListenConfig, ServiceConfig};
pub use error::{AppError, Result};

pub struct AppState {
    pub config: ServiceConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let listen = ListenConfig::from_env()?;
    let config = ServiceConfig::default();
    tracing::info!(
        "{} v{} (API prefix {}, {} allowed origins)",
        config.project_name,
        config.version,
        config.api_prefix,
        config.allowed_origins.len()
    );

    let state = Arc::new(AppState { config });
    let app = build_router(state, listen.max_request_body_bytes());

    let addr = listen.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    let cors = cors::cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(handlers::root))
        .merge(handlers::health::routes())
        .merge(handlers::audio::routes())
        .merge(docs::routes(&state.config.project_name, &state.config.version))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
