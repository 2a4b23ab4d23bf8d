use chrono::Utc;
use serde::{Deserialize, Serialize};

pub type SenderAddress = String;

/// One decoded protocol unit of a (possibly multi-part) short message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsFragment {
    /// Originating address, if the PDU carried one
    pub sender: Option<SenderAddress>,
    pub body_part: String,
    /// Service-centre timestamp in epoch milliseconds
    pub timestamp_millis: i64,
}

impl SmsFragment {
    pub fn new(sender: Option<&str>, body_part: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            sender: sender.map(str::to_string),
            body_part: body_part.into(),
            timestamp_millis,
        }
    }
}

/// A full message rebuilt from every fragment of one delivery event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructedMessage {
    /// Empty when no fragment carried a sender
    pub sender: SenderAddress,
    pub body: String,
    /// Earliest fragment timestamp in epoch milliseconds
    pub timestamp: i64,
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_new_copies_sender() {
        let fragment = SmsFragment::new(Some("+8210"), "hello", 42);
        assert_eq!(fragment.sender.as_deref(), Some("+8210"));
        assert_eq!(fragment.body_part, "hello");
        assert_eq!(fragment.timestamp_millis, 42);
    }

    #[test]
    fn test_now_millis_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(now_millis() > 1_577_836_800_000);
    }
}
