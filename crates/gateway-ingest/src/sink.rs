//! Downstream sink contract for accepted events

use async_trait::async_trait;
use gateway_core::EventRecord;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Accepts validated event records from the pipeline.
///
/// The sink is the external collaborator of the gateway: it may persist,
/// queue, or route the records. The pipeline hands over the full ordered
/// batch and retains no reference to it afterwards. A sink failure means the
/// input was valid but the system could not accept it; callers surface it
/// separately from validation failures.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Accept a batch of validated records, in input order.
    async fn accept(&self, records: Vec<EventRecord>) -> anyhow::Result<()>;
}

/// In-memory sink that appends accepted records to a shared buffer.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<EventRecord>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records accepted so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no records have been accepted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every accepted record, in acceptance order
    pub fn records(&self) -> Vec<EventRecord> {
        self.lock().clone()
    }

    // A poisoned lock still guards valid data here; recover the guard.
    fn lock(&self) -> MutexGuard<'_, Vec<EventRecord>> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn accept(&self, mut records: Vec<EventRecord>) -> anyhow::Result<()> {
        self.lock().append(&mut records);
        Ok(())
    }
}
