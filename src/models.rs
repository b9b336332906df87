//! Response payloads.
//!
//! Flat records, built fresh per request, serialized, discarded. No identity,
//! no persistence. `Deserialize` is derived so clients (and tests) can parse
//! responses back with the same definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of `GET /api`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    /// Advanced server only; omitted entirely from the main server's payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

/// Payload of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub timestamp: String,
    pub uptime: String,
}

/// Payload of `GET /info`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerInfo {
    pub service: String,
    pub version: String,
    pub start_time: String,
    pub endpoints: Vec<String>,
}

/// Payload of `GET /stats`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Stats {
    pub total_requests: u64,
    pub server_uptime: String,
    pub current_time: String,
    pub service: String,
}

/// Payload of `GET /greet`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
    pub timestamp: String,
    pub server: String,
}
