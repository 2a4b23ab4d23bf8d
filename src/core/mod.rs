pub mod alerts;
pub mod config;
pub mod model;
pub mod receiver;
pub mod sink;
pub mod sms;
