// Disaster-alert classification.
//
// Architecture:
// - keywords.rs: Keyword set and substring matching
// - model.rs: Alert payload and its JSON wire form
// - engine.rs: Classifies reassembled messages and emits payloads to a sink

pub mod engine;
pub mod keywords;
pub mod model;
