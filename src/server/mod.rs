pub mod api;

use crate::analysis::PanicAnalyzer;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only analyzer
pub type SharedAnalyzer = Arc<PanicAnalyzer>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: SharedAnalyzer,
}

/// Build the API router
pub fn router(analyzer: SharedAnalyzer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health_handler))
        .route("/panic/analyze", get(api::analyze_handler))
        .route("/panic/pre-panic", get(api::pre_panic_handler))
        .route("/panic/range", get(api::range_handler))
        .layer(cors)
        .with_state(AppState { analyzer })
}

/// Start the axum server
pub async fn serve(analyzer: SharedAnalyzer, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Registering routes:");
    tracing::info!("  GET /health");
    tracing::info!("  GET /panic/analyze?date=2018-02-06");
    tracing::info!("  GET /panic/pre-panic?date=2018-02-06");
    tracing::info!("  GET /panic/range?start=2018-02-01&end=2018-02-28");

    let app = router(analyzer);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
