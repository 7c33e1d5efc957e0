//! HTTP server assembly

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::api::{self, AppState};
use crate::config::AppConfig;

/// Serve the API and static frontend assets until shutdown.
pub async fn run(config: &AppConfig, state: Arc<AppState>) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = axum::Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
