//! Batch-level admission policy

use crate::{IngestError, Result};

/// Default ceiling on the number of events in one batch
pub const MAX_BATCH_SIZE: usize = 100;

/// Default ceiling on the raw request body, in bytes (50KB)
pub const MAX_PAYLOAD_BYTES: usize = 50 * 1024;

/// Configurable batch-level limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionLimits {
    pub max_batch_size: usize,
    pub max_payload_bytes: usize,
}

impl Default for AdmissionLimits {
    fn default() -> Self {
        Self {
            max_batch_size: MAX_BATCH_SIZE,
            max_payload_bytes: MAX_PAYLOAD_BYTES,
        }
    }
}

/// Enforces batch-level limits before any per-event validation.
///
/// Pure decision function; checks run in a fixed order so rejections are
/// deterministic and reproducible for a given input.
#[derive(Debug, Clone, Default)]
pub struct BatchAdmissionPolicy {
    limits: AdmissionLimits,
}

impl BatchAdmissionPolicy {
    /// Create a policy with custom limits
    pub fn new(limits: AdmissionLimits) -> Self {
        Self { limits }
    }

    /// Get the limits this policy enforces
    pub fn limits(&self) -> &AdmissionLimits {
        &self.limits
    }

    /// Admit or reject a batch. First failing check wins:
    /// empty batch, then payload ceiling, then batch-count ceiling.
    ///
    /// `raw_byte_len` is the length of the raw serialized request body, not
    /// of a re-serialization of parsed structures.
    pub fn admit(&self, batch_len: usize, raw_byte_len: usize) -> Result<()> {
        if batch_len == 0 {
            return Err(IngestError::EmptyBatch);
        }

        if raw_byte_len > self.limits.max_payload_bytes {
            return Err(IngestError::PayloadTooLarge);
        }

        if batch_len > self.limits.max_batch_size {
            return Err(IngestError::BatchTooLarge);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_batch_within_limits() {
        let policy = BatchAdmissionPolicy::default();
        assert!(policy.admit(1, 100).is_ok());
        assert!(policy.admit(100, MAX_PAYLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_empty_batch() {
        let policy = BatchAdmissionPolicy::default();
        let actual = policy.admit(0, 2);
        assert!(matches!(actual, Err(IngestError::EmptyBatch)));
    }

    #[test]
    fn test_empty_batch_wins_over_payload_size() {
        // Emptiness is checked first, regardless of raw byte length.
        let policy = BatchAdmissionPolicy::default();
        let actual = policy.admit(0, MAX_PAYLOAD_BYTES + 1);
        assert!(matches!(actual, Err(IngestError::EmptyBatch)));
    }

    #[test]
    fn test_rejects_oversized_payload() {
        let policy = BatchAdmissionPolicy::default();
        let actual = policy.admit(1, MAX_PAYLOAD_BYTES + 1);
        assert!(matches!(actual, Err(IngestError::PayloadTooLarge)));
    }

    #[test]
    fn test_payload_size_wins_over_batch_count() {
        let policy = BatchAdmissionPolicy::default();
        let actual = policy.admit(MAX_BATCH_SIZE + 1, MAX_PAYLOAD_BYTES + 1);
        assert!(matches!(actual, Err(IngestError::PayloadTooLarge)));
    }

    #[test]
    fn test_rejects_oversized_batch() {
        let policy = BatchAdmissionPolicy::default();
        let actual = policy.admit(MAX_BATCH_SIZE + 1, 1024);
        assert!(matches!(actual, Err(IngestError::BatchTooLarge)));
    }

    #[test]
    fn test_boundary_values_are_admitted() {
        let policy = BatchAdmissionPolicy::default();
        assert!(policy.admit(MAX_BATCH_SIZE, MAX_PAYLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_custom_limits() {
        let policy = BatchAdmissionPolicy::new(AdmissionLimits {
            max_batch_size: 2,
            max_payload_bytes: 64,
        });

        assert!(policy.admit(2, 64).is_ok());
        assert!(matches!(policy.admit(3, 64), Err(IngestError::BatchTooLarge)));
        assert!(matches!(policy.admit(2, 65), Err(IngestError::PayloadTooLarge)));
    }
}
