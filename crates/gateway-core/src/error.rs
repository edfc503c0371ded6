use thiserror::Error;

/// Core error types for the gateway
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown event type: {value}")]
    UnknownEventType { value: String },

    #[error("User hash must be a 32-character hexadecimal string")]
    MalformedUserHash,

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a new unknown-event-type error
    pub fn unknown_event_type(value: impl Into<String>) -> Self {
        Self::UnknownEventType {
            value: value.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
