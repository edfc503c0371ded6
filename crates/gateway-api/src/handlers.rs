//! HTTP handlers for gateway endpoints

use crate::{Result, types::HealthResponse};
use axum::{body::Bytes, extract::State, response::Json};
use chrono::Utc;
use gateway_ingest::IngestionPipeline;
use std::{sync::Arc, time::Instant};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<IngestionPipeline>,
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an ingestion pipeline
    pub fn new(pipeline: Arc<IngestionPipeline>) -> Self {
        Self {
            pipeline,
            start_time: Instant::now(),
        }
    }
}

/// Ingest a batch of analytics events.
///
/// The handler passes the raw body bytes straight to the pipeline so the
/// payload ceiling is measured on what was actually received, never on a
/// re-serialization.
pub async fn ingest_events(State(state): State<AppState>, body: Bytes) -> Result<String> {
    let report = state.pipeline.ingest(&body).await?;

    info!(accepted = report.accepted, "batch accepted");
    Ok(format!("Events ingested successfully: {}", report.accepted))
}

/// Service welcome message
pub async fn root() -> &'static str {
    "Welcome to Event ingestion service"
}

/// API version information
pub async fn api_version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Event ingestion Service version 1"
    }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}

/// Simple ping endpoint
pub async fn ping() -> &'static str {
    "pong"
}
