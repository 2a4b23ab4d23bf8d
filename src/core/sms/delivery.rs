//! The raw delivery event handed over by the host broadcast layer.
//!
//! Turning PDU bytes into fragments is the host's job; this module only
//! defines the seam and drops whatever the host decoder rejects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::model::SmsFragment;

/// Routing action carried by an incoming-SMS broadcast.
pub const SMS_RECEIVED_ACTION: &str = "android.provider.Telephony.SMS_RECEIVED";

/// One delivery event as delivered by the OS broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEvent {
    pub action: String,
    /// Declared PDU format, "3gpp" or "3gpp2"
    pub format: Option<String>,
    /// Raw PDUs in arrival order; `None` when the bundle was malformed
    pub pdus: Option<Vec<Vec<u8>>>,
}

impl DeliveryEvent {
    pub fn sms_received(format: Option<&str>, pdus: Vec<Vec<u8>>) -> Self {
        Self {
            action: SMS_RECEIVED_ACTION.to_string(),
            format: format.map(str::to_string),
            pdus: Some(pdus),
        }
    }

    pub fn is_sms_received(&self) -> bool {
        self.action == SMS_RECEIVED_ACTION
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty PDU")]
    Empty,
    #[error("malformed PDU: {0}")]
    Malformed(String),
    #[error("unsupported PDU format: {0}")]
    UnsupportedFormat(String),
}

/// Host-provided PDU decoder.
pub trait PduDecoder {
    fn decode(&self, pdu: &[u8], format: Option<&str>) -> Result<SmsFragment, DecodeError>;
}

/// Decode every PDU of `event` in order. PDUs the decoder rejects are left
/// out of the result.
pub fn decode_fragments(event: &DeliveryEvent, decoder: &dyn PduDecoder) -> Vec<SmsFragment> {
    let Some(pdus) = event.pdus.as_ref() else {
        log::debug!("Delivery event carried no PDUs");
        return Vec::new();
    };

    let format = event.format.as_deref();
    pdus.iter()
        .enumerate()
        .filter_map(|(index, pdu)| match decoder.decode(pdu, format) {
            Ok(fragment) => Some(fragment),
            Err(e) => {
                log::debug!("Skipping PDU {} of {}: {}", index, pdus.len(), e);
                None
            }
        })
        .collect()
}
