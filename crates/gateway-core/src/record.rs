use crate::{DateTime, EventId, EventType, PayloadData, UserHash};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Free-form client context attached to an event.
///
/// All sub-fields are optional and accepted as-is; no validation failures
/// originate here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Session context attached to an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime>,
}

/// Provenance metadata attached to an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

/// The validated, in-memory representation of one accepted event.
///
/// Created exclusively by the mapping step of the ingestion pipeline, which
/// assigns the identifier and timestamp at acceptance time. Immutable after
/// construction; ownership passes to the sink on handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Unique event identifier, assigned at acceptance
    #[setters(skip)]
    pub id: EventId,
    /// Resolved event type
    #[setters(skip)]
    pub event_type: EventType,
    /// Ingestion timestamp, assigned at acceptance
    #[setters(skip)]
    pub timestamp: DateTime,
    /// Validated user hash, stored as received
    #[setters(skip)]
    pub user_hash: UserHash,
    /// Optional client context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
    /// Optional session context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
    /// Optional provenance metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Event payload data
    #[setters(skip)]
    pub data: PayloadData,
}

impl EventRecord {
    /// Create a new record, assigning a fresh identifier and timestamp
    pub fn new(event_type: EventType, user_hash: UserHash, data: PayloadData) -> Self {
        Self {
            id: EventId::generate(),
            event_type,
            timestamp: chrono::Utc::now(),
            user_hash,
            client_info: None,
            session: None,
            metadata: None,
            data,
        }
    }
}
