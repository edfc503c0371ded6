//! # gateway-api
//!
//! HTTP surface for the event ingestion gateway. Maps the ingestion pipeline
//! onto an axum router: `POST /ingest` for batches, plus the service root,
//! API-version, and health endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

// Re-export commonly used types
pub use error::{ApiError, Result};
pub use handlers::AppState;
pub use routes::create_router;
pub use types::HealthResponse;
