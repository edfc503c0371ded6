//! Error taxonomy for batch ingestion

use thiserror::Error;

/// Why a single event failed validation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("event type is missing or not a recognized type")]
    InvalidEventType,

    #[error("user hash must be a 32-character hexadecimal string")]
    InvalidUserHash,

    #[error("event data is required")]
    MissingPayloadData,
}

/// Errors surfaced by the ingestion pipeline.
///
/// Everything except [`IngestError::Sink`] is a client-input error; the
/// display strings of the three batch-level rejections are the fixed
/// client-facing messages of the ingest contract.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The request body could not be parsed as a batch of events
    #[error("Request body is not a valid event batch: {source}")]
    MalformedRequest {
        #[from]
        source: serde_json::Error,
    },

    /// The batch contained no events
    #[error("Event list cannot be empty")]
    EmptyBatch,

    /// The raw request body exceeded the payload ceiling
    #[error("Payload size cannot exceed 50KB")]
    PayloadTooLarge,

    /// The batch contained more events than the count ceiling
    #[error("Batch size cannot exceed 100 events")]
    BatchTooLarge,

    /// An event in the batch failed validation; the whole batch is rejected
    #[error("Event at index {index} is invalid: {reason}")]
    Validation {
        index: usize,
        reason: ValidationReason,
    },

    /// The downstream sink refused the batch after it validated
    #[error("Event sink rejected the batch: {message}")]
    Sink { message: String },
}

impl IngestError {
    /// Create a validation error for the element at `index`
    pub fn validation(index: usize, reason: ValidationReason) -> Self {
        Self::Validation { index, reason }
    }

    /// Create a sink handoff error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Whether this error is attributable to the client's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Sink { .. })
    }
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;
