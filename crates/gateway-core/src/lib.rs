//! # Gateway Core
//!
//! Foundational types for the analytics event ingestion gateway. This crate
//! defines the vocabulary the rest of the workspace builds upon.
//!
//! ## Key Components
//!
//! - **Event types**: the closed registry of accepted analytics event tags
//! - **User hashes**: syntactic validation for 32-character hex identifiers
//! - **Records**: the validated, immutable in-memory event representation
//! - **Identifiers**: unique event ID generation
//! - **Errors**: common error types and handling

pub mod error;
pub mod event_type;
pub mod hash;
pub mod id;
pub mod record;

// Re-export commonly used types
pub use error::{Error, Result};
pub use event_type::EventType;
pub use hash::{UserHash, UserHashValidator};
pub use id::EventId;
pub use record::{ClientInfo, EventRecord, Metadata, SessionInfo};

/// Common type aliases for convenience
pub type DateTime = chrono::DateTime<chrono::Utc>;
pub type Json = serde_json::Value;
pub type PayloadData = serde_json::Map<String, serde_json::Value>;
