//! # Gateway Server
//!
//! Server binary for the analytics event ingestion gateway. Wires the
//! ingestion pipeline into the HTTP surface, loads configuration from file,
//! environment, and flags, and manages the server lifecycle with graceful
//! shutdown.

pub mod cli;
pub mod config;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use cli::{Args, Commands};
pub use config::GatewayConfig;
pub use error::{ConfigError, Result, ServerError};
pub use server::GatewayServer;
