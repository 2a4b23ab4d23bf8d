use std::sync::Arc;

use super::alerts::engine::AlertClassifier;
use super::alerts::model::AlertPayload;
use super::config::Settings;
use super::model::SmsFragment;
use super::sink::SinkSlot;
use super::sms::aggregator::aggregate;
use super::sms::delivery::{decode_fragments, DeliveryEvent, PduDecoder};

/// Entry point the host calls once per SMS delivery event.
///
/// Runs aggregation, classification and emission synchronously on the
/// caller's thread. Malformed input never fails; it just produces no alert.
pub struct SmsReceiver {
    classifier: AlertClassifier,
    sink: Arc<SinkSlot>,
}

impl SmsReceiver {
    pub fn new(classifier: AlertClassifier, sink: Arc<SinkSlot>) -> Self {
        Self { classifier, sink }
    }

    pub fn from_settings(settings: &Settings, sink: Arc<SinkSlot>) -> Self {
        Self::new(AlertClassifier::new(settings.matcher()), sink)
    }

    /// Shared listener slot the UI side registers with.
    pub fn sink(&self) -> &Arc<SinkSlot> {
        &self.sink
    }

    /// Handle a raw broadcast. Events that are not incoming-SMS broadcasts are ignored.
    pub fn on_receive(
        &self,
        event: &DeliveryEvent,
        decoder: &dyn PduDecoder,
        now: i64,
    ) -> Option<AlertPayload> {
        if !event.is_sms_received() {
            log::debug!("Ignoring broadcast with action '{}'", event.action);
            return None;
        }
        let fragments = decode_fragments(event, decoder);
        self.on_fragments(&fragments, now)
    }

    /// Handle an already decoded fragment sequence.
    pub fn on_fragments(&self, fragments: &[SmsFragment], now: i64) -> Option<AlertPayload> {
        let message = aggregate(fragments, now);
        log::debug!(
            "Reassembled {} fragment(s) into {} chars",
            fragments.len(),
            message.body.chars().count()
        );
        self.classifier.classify_and_emit(&message, self.sink.as_ref())
    }
}
