//! API route definitions and setup

use crate::handlers::{AppState, api_version, health_check, ingest_events, ping, root};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Outer cap on request bodies, applied before any parsing.
///
/// Deliberately above the pipeline's 50KB ceiling so oversized-but-readable
/// bodies still get the contractual rejection message instead of a bare 413.
const BODY_READ_LIMIT: usize = 1024 * 1024;

/// Create the gateway router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Ingestion endpoint
        .route("/ingest", post(ingest_events))
        // Service information endpoints
        .route("/", get(root))
        .route("/api/v1", get(api_version))
        // Health and utility endpoints
        .route("/health", get(health_check))
        .route("/ping", get(ping))
        .layer(DefaultBodyLimit::max(BODY_READ_LIMIT))
        .with_state(state)
}
