//! Shared constants for the credit economy and turn outcomes

/// Credits charged when a message is accepted.
pub const SEND_COST: i64 = 1;

/// Credits charged when a plain or deep-research reply lands.
pub const REPLY_COST: i64 = 2;

/// Credits charged when a smart-match card lands.
pub const MATCH_COST: i64 = 5;

/// Plain turns: draws below this fail with a transient error.
pub const CHAT_FAILURE_CUTOFF: f64 = 0.10;

/// Plain turns: draws below this (and above the failure cutoff) exhaust credits.
pub const CHAT_EXHAUSTED_CUTOFF: f64 = 0.15;

pub const MATCH_FAILURE_CUTOFF: f64 = 0.12;

pub const MATCH_EXHAUSTED_CUTOFF: f64 = 0.20;

/// Maximum number of saved chats in the history list.
pub const MAX_SAVED_CHATS: usize = 4;
