use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of analytics event types the gateway accepts.
///
/// Each variant has a canonical camelCase wire string distinct from its
/// internal name. The wire mapping is total and injective; an unrecognized
/// wire string is an error, never silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "pageView")]
    PageView,
    #[serde(rename = "userAction")]
    UserAction,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "formSubmit")]
    FormSubmit,
    #[serde(rename = "apiCall")]
    ApiCall,
    #[serde(rename = "performance")]
    Performance,
    #[serde(rename = "featureUsage")]
    FeatureUsage,
    #[serde(rename = "userPreference")]
    UserPreference,
    #[serde(rename = "search")]
    Search,
    #[serde(rename = "authentication")]
    Authentication,
}

impl EventType {
    /// Every member of the registry, in declaration order.
    pub const ALL: [EventType; 10] = [
        EventType::PageView,
        EventType::UserAction,
        EventType::Error,
        EventType::FormSubmit,
        EventType::ApiCall,
        EventType::Performance,
        EventType::FeatureUsage,
        EventType::UserPreference,
        EventType::Search,
        EventType::Authentication,
    ];

    /// Get the canonical wire string for this event type
    pub fn as_wire(&self) -> &'static str {
        match self {
            EventType::PageView => "pageView",
            EventType::UserAction => "userAction",
            EventType::Error => "error",
            EventType::FormSubmit => "formSubmit",
            EventType::ApiCall => "apiCall",
            EventType::Performance => "performance",
            EventType::FeatureUsage => "featureUsage",
            EventType::UserPreference => "userPreference",
            EventType::Search => "search",
            EventType::Authentication => "authentication",
        }
    }

    /// Resolve a wire string to its event type.
    ///
    /// Exact match only: case variants and whitespace-padded strings do not
    /// resolve.
    pub fn resolve(wire: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|event_type| event_type.as_wire() == wire)
            .ok_or_else(|| Error::unknown_event_type(wire))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}
