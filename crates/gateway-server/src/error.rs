use thiserror::Error;

/// Errors that can occur in the gateway server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {source}")]
    Serve {
        #[from]
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create an invalid-value error
    pub fn invalid_value(field: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;
