//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Uptime in seconds
    pub uptime: u64,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_health_response_serialization() {
        let fixture = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            uptime: 42,
            timestamp: Utc::now(),
        };

        let actual = serde_json::to_value(&fixture).unwrap();
        assert_eq!(actual["status"], "healthy");
        assert_eq!(actual["uptime"], 42);
    }
}
