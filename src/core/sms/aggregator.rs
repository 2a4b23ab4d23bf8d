//! Reassembly of multi-part messages.
//!
//! Fragments arrive in transport order. Bodies are concatenated as-is, the
//! first non-null sender wins and the earliest timestamp is kept as the
//! delivery time of the combined message.

use crate::core::model::{ReconstructedMessage, SmsFragment};

/// Accumulates the fragments of a single delivery event.
#[derive(Debug, Default)]
pub struct FragmentAggregator {
    sender: Option<String>,
    body: String,
    earliest: Option<i64>,
    count: usize,
}

impl FragmentAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next fragment in arrival order.
    pub fn push(&mut self, fragment: &SmsFragment) {
        if self.sender.is_none() {
            self.sender = fragment.sender.clone();
        }
        self.body.push_str(&fragment.body_part);
        self.earliest = Some(match self.earliest {
            Some(prev) => std::cmp::min(prev, fragment.timestamp_millis),
            None => fragment.timestamp_millis,
        });
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Produce the combined message. `now` is used as the timestamp when no
    /// fragment was pushed.
    pub fn finish(self, now: i64) -> ReconstructedMessage {
        ReconstructedMessage {
            sender: self.sender.unwrap_or_default(),
            body: self.body,
            timestamp: self.earliest.unwrap_or(now),
        }
    }
}

/// Rebuild one message from an ordered fragment sequence.
pub fn aggregate(fragments: &[SmsFragment], now: i64) -> ReconstructedMessage {
    let mut aggregator = FragmentAggregator::new();
    for fragment in fragments {
        aggregator.push(fragment);
    }
    aggregator.finish(now)
}
