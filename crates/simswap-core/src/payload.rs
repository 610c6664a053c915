//! SIM Change Payload
//!
//! The wire payload the mock backend returns: a single
//! `latestSimChange` field holding an ISO-8601 timestamp string.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Response body of the mock retrieve-date lookup
///
/// Exactly one string field, serialized under the `latestSimChange`
/// key. No other fields, no nesting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimChangePayload {
    /// Timestamp of the most recent SIM change
    #[serde(rename = "latestSimChange")]
    pub latest_sim_change: String,
}

impl SimChangePayload {
    /// Create a payload for the given timestamp string
    pub fn new(latest_sim_change: impl Into<String>) -> Self {
        Self {
            latest_sim_change: latest_sim_change.into(),
        }
    }

    /// Serialize to the JSON string written into the response body
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
