// Alert payload pushed to the UI layer.
//
// Wire format is a flat JSON object: {"sender": str, "body": str, "timestamp": int}.
// Field order below is the serialized key order.

use serde::{Deserialize, Serialize};

use crate::core::model::ReconstructedMessage;

/// Alert record built from a message that matched the keyword set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPayload {
    pub sender: String,
    pub body: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl AlertPayload {
    /// Serialize to the canonical wire string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&ReconstructedMessage> for AlertPayload {
    fn from(message: &ReconstructedMessage) -> Self {
        Self {
            sender: message.sender.clone(),
            body: message.body.clone(),
            timestamp: message.timestamp,
        }
    }
}
