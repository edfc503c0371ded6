//! Per-event validation of raw submissions

use crate::ValidationReason;
use gateway_core::{ClientInfo, EventRecord, EventType, PayloadData, UserHash, UserHashValidator};
use serde::{Deserialize, Serialize};

/// One raw event submission as received on the wire.
///
/// Required fields are modeled as `Option` so that their absence surfaces as
/// a validation failure with a specific reason, not as a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PayloadData>,
}

/// A submission that passed every per-event check.
///
/// Carries the resolved event type and accepted hash so the mapping step
/// never re-validates.
#[derive(Debug, Clone)]
pub struct ValidatedEvent {
    pub event_type: EventType,
    pub user_hash: UserHash,
    pub client_info: Option<ClientInfo>,
    pub data: PayloadData,
}

impl ValidatedEvent {
    /// Map to the internal record, assigning identifier and timestamp.
    pub fn into_record(self) -> EventRecord {
        let mut record = EventRecord::new(self.event_type, self.user_hash, self.data);
        if let Some(client_info) = self.client_info {
            record = record.client_info(client_info);
        }
        record
    }
}

/// Validates individual submissions from an admitted batch.
///
/// Checks run in a fixed order per element: event type, user hash, payload
/// data. Client info is accepted as-is. Pure and idempotent.
#[derive(Debug, Clone, Default)]
pub struct SubmissionValidator {
    hash: UserHashValidator,
}

impl SubmissionValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            hash: UserHashValidator::new(),
        }
    }

    /// Validate one submission, returning its resolved parts.
    pub fn validate(
        &self,
        submission: EventSubmission,
    ) -> std::result::Result<ValidatedEvent, ValidationReason> {
        let event_type = submission
            .event_type
            .as_deref()
            .and_then(|wire| EventType::resolve(wire).ok())
            .ok_or(ValidationReason::InvalidEventType)?;

        let user_hash = submission
            .user_hash
            .as_deref()
            .and_then(|candidate| self.hash.validate(candidate).ok())
            .ok_or(ValidationReason::InvalidUserHash)?;

        // Presence is required; an empty map is fine.
        let data = submission.data.ok_or(ValidationReason::MissingPayloadData)?;

        Ok(ValidatedEvent {
            event_type,
            user_hash,
            client_info: submission.client_info,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid_submission() -> EventSubmission {
        serde_json::from_value(json!({
            "eventType": "pageView",
            "userHash": "e9c0494b2b14ca2b48258c05dd6c4c14",
            "data": {"page": "/home"}
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_submission_passes() {
        let validator = SubmissionValidator::new();
        let actual = validator.validate(valid_submission()).unwrap();

        assert_eq!(actual.event_type, EventType::PageView);
        assert_eq!(actual.user_hash.as_str(), "e9c0494b2b14ca2b48258c05dd6c4c14");
        assert_eq!(actual.data["page"], json!("/home"));
        assert_eq!(actual.client_info, None);
    }

    #[test]
    fn test_missing_event_type() {
        let validator = SubmissionValidator::new();
        let mut fixture = valid_submission();
        fixture.event_type = None;

        let actual = validator.validate(fixture).unwrap_err();
        assert_eq!(actual, ValidationReason::InvalidEventType);
    }

    #[test]
    fn test_unknown_event_type() {
        let validator = SubmissionValidator::new();
        let mut fixture = valid_submission();
        fixture.event_type = Some("INVALID_TYPE".to_string());

        let actual = validator.validate(fixture).unwrap_err();
        assert_eq!(actual, ValidationReason::InvalidEventType);
    }

    #[test]
    fn test_missing_user_hash() {
        let validator = SubmissionValidator::new();
        let mut fixture = valid_submission();
        fixture.user_hash = None;

        let actual = validator.validate(fixture).unwrap_err();
        assert_eq!(actual, ValidationReason::InvalidUserHash);
    }

    #[test]
    fn test_malformed_user_hash() {
        let validator = SubmissionValidator::new();
        let mut fixture = valid_submission();
        fixture.user_hash = Some("invalid-hash-format".to_string());

        let actual = validator.validate(fixture).unwrap_err();
        assert_eq!(actual, ValidationReason::InvalidUserHash);
    }

    #[test]
    fn test_missing_payload_data() {
        let validator = SubmissionValidator::new();
        let mut fixture = valid_submission();
        fixture.data = None;

        let actual = validator.validate(fixture).unwrap_err();
        assert_eq!(actual, ValidationReason::MissingPayloadData);
    }

    #[test]
    fn test_empty_payload_data_is_accepted() {
        let validator = SubmissionValidator::new();
        let mut fixture = valid_submission();
        fixture.data = Some(PayloadData::new());

        let actual = validator.validate(fixture).unwrap();
        assert!(actual.data.is_empty());
    }

    #[test]
    fn test_check_order_event_type_before_hash() {
        // Both fields are bad; the event type failure is reported.
        let validator = SubmissionValidator::new();
        let fixture = EventSubmission {
            event_type: Some("nope".to_string()),
            user_hash: Some("also bad".to_string()),
            client_info: None,
            data: None,
        };

        let actual = validator.validate(fixture).unwrap_err();
        assert_eq!(actual, ValidationReason::InvalidEventType);
    }

    #[test]
    fn test_client_info_is_passed_through() {
        let validator = SubmissionValidator::new();
        let fixture: EventSubmission = serde_json::from_value(json!({
            "eventType": "userAction",
            "userHash": "A1B2C3D4E5F6A7B8C9D0E1F2A3B4C5D6",
            "clientInfo": {"userAgent": "Mozilla", "platform": "web"},
            "data": {"element": "button_id"}
        }))
        .unwrap();

        let actual = validator.validate(fixture).unwrap();
        let client_info = actual.client_info.unwrap();
        assert_eq!(client_info.user_agent, Some("Mozilla".to_string()));
        assert_eq!(client_info.platform, Some("web".to_string()));
        assert_eq!(client_info.ip_address, None);
    }

    #[test]
    fn test_into_record_assigns_identity() {
        let validator = SubmissionValidator::new();
        let validated = validator.validate(valid_submission()).unwrap();
        let actual = validated.into_record();

        assert!(actual.id.as_str().starts_with("evt_"));
        assert_eq!(actual.event_type, EventType::PageView);
        assert_eq!(actual.session, None);
        assert_eq!(actual.metadata, None);
    }
}
