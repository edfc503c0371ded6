//! # gateway-ingest
//!
//! Validation-and-admission pipeline for the analytics event gateway.
//!
//! An incoming batch flows through a fixed sequence of stages:
//!
//! ```text
//! raw bytes → parse → admission → per-event validation → mapping → sink handoff
//! ```
//!
//! Admission rejects whole batches early (empty batch, payload ceiling,
//! batch-count ceiling) before any per-element work is spent. Per-event
//! validation checks each element in order and rejects the whole batch on the
//! first failure; acceptance is all-or-nothing. Accepted elements are mapped
//! to [`EventRecord`](gateway_core::EventRecord)s and handed to an
//! [`EventSink`] as one ordered set.
//!
//! The pipeline is stateless across requests: concurrent calls share no
//! mutable state and need no locking.

pub mod admission;
pub mod error;
pub mod pipeline;
pub mod sink;
pub mod validation;

// Re-export commonly used types
pub use admission::{AdmissionLimits, BatchAdmissionPolicy, MAX_BATCH_SIZE, MAX_PAYLOAD_BYTES};
pub use error::{IngestError, Result, ValidationReason};
pub use pipeline::{IngestReport, IngestionPipeline};
pub use sink::{EventSink, MemorySink};
pub use validation::{EventSubmission, SubmissionValidator, ValidatedEvent};
