//! SMS delivery handling.
//!
//! This module turns the raw PDU bundle of one delivery event into decoded
//! fragments and stitches those fragments back into a single message.

pub mod aggregator;
pub mod delivery;
