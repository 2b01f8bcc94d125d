use std::time::Duration;

use crate::core::config::data::Config;
use crate::core::membership::Membership;
use crate::core::session::SessionLimits;

pub const DEFAULT_STARTING_CREDITS: i64 = 50;
pub const DEFAULT_CHAT_LIMIT: usize = 50;
pub const DEFAULT_ATTACHMENT_CAP: usize = 5;
pub const DEFAULT_PURCHASE_CREDITS: i64 = 10;
pub const DEFAULT_LOW_CREDIT_THRESHOLD: i64 = 15;
pub const DEFAULT_LOW_CREDIT_PROBABILITY: f64 = 0.30;
pub const DEFAULT_MIN_DELAY_MS: u64 = 1_000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 3_000;

impl Config {
    pub fn membership(&self) -> Membership {
        self.membership.unwrap_or_default()
    }

    /// Resolves the economy tunables, filling defaults and repairing values
    /// that would break the session invariants.
    pub fn session_limits(&self) -> SessionLimits {
        let min_ms = self.min_delay_ms.unwrap_or(DEFAULT_MIN_DELAY_MS);
        let max_ms = self.max_delay_ms.unwrap_or(DEFAULT_MAX_DELAY_MS);
        let (min_ms, max_ms) = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };

        SessionLimits {
            starting_credits: self.starting_credits.unwrap_or(DEFAULT_STARTING_CREDITS),
            chat_limit: self.chat_limit.unwrap_or(DEFAULT_CHAT_LIMIT).max(2),
            attachment_cap: self.attachment_cap.unwrap_or(DEFAULT_ATTACHMENT_CAP),
            purchase_credits: self
                .purchase_credits
                .unwrap_or(DEFAULT_PURCHASE_CREDITS)
                .max(0),
            low_credit_threshold: self
                .low_credit_threshold
                .unwrap_or(DEFAULT_LOW_CREDIT_THRESHOLD),
            low_credit_probability: self
                .low_credit_probability
                .unwrap_or(DEFAULT_LOW_CREDIT_PROBABILITY)
                .clamp(0.0, 1.0),
            min_delay: Duration::from_millis(min_ms),
            max_delay: Duration::from_millis(max_ms),
        }
    }
}
