//! Batch ingestion orchestrator

use crate::{
    AdmissionLimits, BatchAdmissionPolicy, EventSink, EventSubmission, IngestError, Result,
    SubmissionValidator, ValidatedEvent,
};
use gateway_core::EventRecord;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of a successfully ingested batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of events accepted; equals the batch size
    pub accepted: usize,
}

/// Orchestrates one ingestion request: admission, per-event validation,
/// mapping, and handoff to the sink.
///
/// Holds no mutable state between requests; a single pipeline can serve
/// concurrent callers without locking.
pub struct IngestionPipeline {
    policy: BatchAdmissionPolicy,
    validator: SubmissionValidator,
    sink: Arc<dyn EventSink>,
}

impl IngestionPipeline {
    /// Create a pipeline with the default admission limits
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self::with_limits(sink, AdmissionLimits::default())
    }

    /// Create a pipeline with custom admission limits
    pub fn with_limits(sink: Arc<dyn EventSink>, limits: AdmissionLimits) -> Self {
        Self {
            policy: BatchAdmissionPolicy::new(limits),
            validator: SubmissionValidator::new(),
            sink,
        }
    }

    /// Ingest one raw request body.
    ///
    /// The batch is accepted or rejected atomically: the first failure, in
    /// element order and then per-element check order, determines the
    /// rejection surfaced to the caller. On success every element has been
    /// mapped to an [`EventRecord`] and handed to the sink in input order.
    pub async fn ingest(&self, raw: &[u8]) -> Result<IngestReport> {
        let batch: Vec<EventSubmission> = serde_json::from_slice(raw)?;

        self.policy.admit(batch.len(), raw.len())?;

        let mut validated: Vec<ValidatedEvent> = Vec::with_capacity(batch.len());
        for (index, submission) in batch.into_iter().enumerate() {
            match self.validator.validate(submission) {
                Ok(event) => validated.push(event),
                Err(reason) => {
                    debug!(index, %reason, "rejecting batch");
                    return Err(IngestError::validation(index, reason));
                }
            }
        }

        let records: Vec<EventRecord> = validated
            .into_iter()
            .map(ValidatedEvent::into_record)
            .collect();
        let accepted = records.len();

        self.sink
            .accept(records)
            .await
            .map_err(|e| IngestError::sink(e.to_string()))?;

        info!(accepted, "batch ingested");
        Ok(IngestReport { accepted })
    }
}
