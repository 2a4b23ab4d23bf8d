#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod core;

pub use crate::core::alerts::engine::AlertClassifier;
pub use crate::core::alerts::keywords::{KeywordMatcher, DEFAULT_KEYWORDS};
pub use crate::core::alerts::model::AlertPayload;
pub use crate::core::model::{ReconstructedMessage, SmsFragment};
pub use crate::core::receiver::SmsReceiver;
pub use crate::core::sink::{ChannelSink, PayloadSink, SinkSlot};
