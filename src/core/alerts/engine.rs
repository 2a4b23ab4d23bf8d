// Alert classifier - decides whether a reassembled message is a disaster alert
// and pushes the serialized payload to the sink when it is.

use super::keywords::KeywordMatcher;
use super::model::AlertPayload;
use crate::core::model::ReconstructedMessage;
use crate::core::sink::PayloadSink;

/// Classifier state: only the keyword set, which is read-only between reloads.
#[derive(Debug, Clone, Default)]
pub struct AlertClassifier {
    matcher: KeywordMatcher,
}

impl AlertClassifier {
    pub fn new(matcher: KeywordMatcher) -> Self {
        Self { matcher }
    }

    /// Replace the keyword set (hot-reload friendly)
    pub fn update_matcher(&mut self, matcher: KeywordMatcher) {
        self.matcher = matcher;
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    /// Returns the payload to surface, or None when the body has no keyword.
    pub fn classify(&self, message: &ReconstructedMessage) -> Option<AlertPayload> {
        let keyword = self.matcher.matched_keyword(&message.body)?;
        log::info!(
            "Disaster alert from '{}' matched keyword '{}'",
            message.sender,
            keyword
        );
        Some(AlertPayload::from(message))
    }

    /// Classify `message` and emit its JSON to `sink` on a match.
    /// Emits at most once and hands back the emitted payload. A payload that
    /// fails to serialize is dropped without reaching the sink.
    pub fn classify_and_emit(
        &self,
        message: &ReconstructedMessage,
        sink: &dyn PayloadSink,
    ) -> Option<AlertPayload> {
        let payload = self.classify(message)?;
        match payload.to_json() {
            Ok(json) => {
                sink.emit(json);
                Some(payload)
            }
            Err(e) => {
                log::warn!("Dropping alert from '{}': {}", payload.sender, e);
                None
            }
        }
    }
}
