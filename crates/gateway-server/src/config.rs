//! Server configuration: defaults, TOML file loading, and flag overrides

use crate::{ConfigError, cli::Args};
use gateway_ingest::{AdmissionLimits, MAX_BATCH_SIZE, MAX_PAYLOAD_BYTES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerSection,
    pub limits: LimitsSection,
    pub logging: LoggingSection,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind_address: String,
    pub port: u16,
}

/// Batch admission ceilings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    pub max_batch_size: usize,
    pub max_payload_bytes: usize,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            limits: LimitsSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_batch_size: MAX_BATCH_SIZE,
            max_payload_bytes: MAX_PAYLOAD_BYTES,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration: defaults, then the optional TOML file, then flag
    /// and environment overrides. Flags win.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(bind_address) = &args.bind_address {
            config.server.bind_address = bind_address.clone();
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::InvalidFile(e.to_string()))
    }

    /// Validate the resolved configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::invalid_value("server.port", self.server.port));
        }
        if self.limits.max_batch_size == 0 {
            return Err(ConfigError::invalid_value(
                "limits.max_batch_size",
                self.limits.max_batch_size,
            ));
        }
        if self.limits.max_payload_bytes == 0 {
            return Err(ConfigError::invalid_value(
                "limits.max_payload_bytes",
                self.limits.max_payload_bytes,
            ));
        }
        Ok(())
    }

    /// Admission limits for the ingestion pipeline
    pub fn admission_limits(&self) -> AdmissionLimits {
        AdmissionLimits {
            max_batch_size: self.limits.max_batch_size,
            max_payload_bytes: self.limits.max_payload_bytes,
        }
    }

    /// Listener address in `host:port` form
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Render the default configuration as TOML
    pub fn generate_default() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::InvalidFile(e.to_string()))
    }
}
