//! Sentinel AI Server
//!
//! HTTP serving layer for the sentinel scoring core.
//!
//! # Routes
//!
//! ```text
//! GET  /health       liveness + last tier
//! POST /evaluate     v2 snapshot scoring  {"telemetry": {...}}
//! GET  /status       last v2 result
//! POST /v3/evaluate  contract v3 (fail-closed, always 200)
//! ```
//!
//! The scoring service is built once in `main` and injected through
//! `AppState`; there is no process-global client.

mod config;
mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use sentinel_core::constants::{APP_NAME, APP_VERSION};
use sentinel_core::logic::config::load_config;
use sentinel_core::SentinelWrapper;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging (core `log` records are forwarded into tracing).
    // JSON lines in production.
    let fmt_layer = if config.is_production() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "sentinel_server=debug,sentinel_core=info,tower_http=debug".into()))
        .with(fmt_layer)
        .init();

    tracing::info!("{} server {} starting ({})...", APP_NAME, APP_VERSION, config.environment);

    let sentinel_config = load_config(config.sentinel_config.as_deref())
        .context("Failed to load sentinel config")?;
    let service = Arc::new(SentinelWrapper::from_config(sentinel_config));
    tracing::info!(model_loaded = service.client().model().is_some(), "Scoring service ready");

    let state = AppState {
        service,
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SentinelWrapper>,
    pub config: config::Config,
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if !state.config.is_production() {
        cors = cors.allow_origin(Any);
    }

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/evaluate", post(handlers::evaluate::evaluate))
        .route("/status", get(handlers::status::last))
        .route("/v3/evaluate", post(handlers::v3::evaluate))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
