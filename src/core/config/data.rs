use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::membership::Membership;

/// On-disk configuration. Every field is optional; unset fields fall back to
/// the defaults in [`crate::core::config::defaults`].
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Credits available when the app starts
    pub starting_credits: Option<i64>,
    /// Maximum number of messages in one chat before "new chat" is required
    pub chat_limit: Option<usize>,
    /// Maximum entries per attachment list (camera, photo library, documents)
    pub attachment_cap: Option<usize>,
    /// Credits added by one purchase
    pub purchase_credits: Option<i64>,
    /// Balance at or below which the low-credits nudge may appear
    pub low_credit_threshold: Option<i64>,
    /// Chance of showing the low-credits nudge after a deduction
    pub low_credit_probability: Option<f64>,
    /// Shortest simulated thinking delay, in milliseconds
    pub min_delay_ms: Option<u64>,
    /// Longest simulated thinking delay, in milliseconds
    pub max_delay_ms: Option<u64>,
    /// Membership tier selected at startup
    pub membership: Option<Membership>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
