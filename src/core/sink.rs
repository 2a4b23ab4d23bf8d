//! Delivery of serialized alert payloads to the UI layer.
//!
//! The UI side subscribes through a single revocable listener slot: starting
//! to listen installs a sink, cancelling clears it, and anything emitted while
//! nobody listens is dropped.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::mpsc;

/// Receives serialized payloads. Emission is fire-and-forget.
pub trait PayloadSink: Send + Sync {
    fn emit(&self, payload: String);
}

/// Single-subscriber slot holding the currently registered sink, if any.
#[derive(Default)]
pub struct SinkSlot {
    current: RwLock<Option<Arc<dyn PayloadSink>>>,
}

impl SinkSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `sink` as the listener, replacing any previous one.
    pub fn register(&self, sink: Arc<dyn PayloadSink>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.is_some() {
            log::debug!("Replacing registered alert listener");
        }
        *current = Some(sink);
    }

    /// Remove the current listener. Later emits are dropped.
    pub fn unregister(&self) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = None;
    }

    pub fn is_registered(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl PayloadSink for SinkSlot {
    fn emit(&self, payload: String) {
        // Clone the handle so the lock is not held while the sink runs.
        let sink = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match sink {
            Some(sink) => sink.emit(payload),
            None => log::debug!("No alert listener registered, dropping payload"),
        }
    }
}

/// Sink backed by an unbounded tokio channel, the event stream consumed by the UI runtime.
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end of its stream.
    pub fn pair() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl PayloadSink for ChannelSink {
    fn emit(&self, payload: String) {
        if self.tx.send(payload).is_err() {
            log::debug!("Alert stream receiver closed, dropping payload");
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::PayloadSink;

    /// Records every emitted payload.
    #[derive(Default)]
    pub struct CollectingSink {
        pub emitted: Mutex<Vec<String>>,
    }

    impl CollectingSink {
        pub fn payloads(&self) -> Vec<String> {
            self.emitted.lock().unwrap().clone()
        }
    }

    impl PayloadSink for CollectingSink {
        fn emit(&self, payload: String) {
            self.emitted.lock().unwrap().push(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::CollectingSink;
    use super::*;

    #[test]
    fn test_emit_without_listener_is_silent() {
        let slot = SinkSlot::new();
        assert!(!slot.is_registered());
        slot.emit("dropped".to_string());
    }

    #[test]
    fn test_register_then_emit() {
        let slot = SinkSlot::new();
        let collector = Arc::new(CollectingSink::default());
        slot.register(collector.clone());
        assert!(slot.is_registered());

        slot.emit("one".to_string());
        assert_eq!(collector.payloads(), vec!["one".to_string()]);
    }

    #[test]
    fn test_unregister_drops_later_emits() {
        let slot = SinkSlot::new();
        let collector = Arc::new(CollectingSink::default());
        slot.register(collector.clone());
        slot.emit("before".to_string());
        slot.unregister();
        slot.emit("after".to_string());

        assert!(!slot.is_registered());
        assert_eq!(collector.payloads(), vec!["before".to_string()]);
    }

    #[test]
    fn test_register_replaces_previous_listener() {
        let slot = SinkSlot::new();
        let first = Arc::new(CollectingSink::default());
        let second = Arc::new(CollectingSink::default());
        slot.register(first.clone());
        slot.register(second.clone());
        slot.emit("x".to_string());

        assert!(first.payloads().is_empty());
        assert_eq!(second.payloads(), vec!["x".to_string()]);
    }

    #[test]
    fn test_concurrent_emit_and_swap() {
        let slot = Arc::new(SinkSlot::new());
        let collector = Arc::new(CollectingSink::default());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let slot = slot.clone();
                let collector = collector.clone();
                std::thread::spawn(move || {
                    for n in 0..100 {
                        if n % 10 == 0 {
                            slot.register(collector.clone());
                        }
                        if n % 25 == 0 {
                            slot.unregister();
                        }
                        slot.emit(format!("{i}-{n}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(collector.payloads().len() <= 400);
    }

    #[tokio::test]
    async fn test_channel_sink_delivers_in_order() {
        let (sink, mut rx) = ChannelSink::pair();
        sink.emit("a".to_string());
        sink.emit("b".to_string());

        assert_eq!(rx.recv().await.as_deref(), Some("a"));
        assert_eq!(rx.recv().await.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_channel_sink_ignores_closed_receiver() {
        let (sink, rx) = ChannelSink::pair();
        drop(rx);
        sink.emit("lost".to_string());
    }
}
