use std::path::Path;

use crate::core::config::data::{path_display, Config};

impl Config {
    pub fn print_all(&self, path: Option<&Path>) {
        match path {
            Some(path) => println!("Configuration ({}):", path_display(path)),
            None => println!("Configuration (no config directory available):"),
        }
        let limits = self.session_limits();
        print_entry("starting-credits", self.starting_credits.is_some(), limits.starting_credits);
        print_entry("chat-limit", self.chat_limit.is_some(), limits.chat_limit);
        print_entry("attachment-cap", self.attachment_cap.is_some(), limits.attachment_cap);
        print_entry("purchase-credits", self.purchase_credits.is_some(), limits.purchase_credits);
        print_entry(
            "low-credit-threshold",
            self.low_credit_threshold.is_some(),
            limits.low_credit_threshold,
        );
        print_entry(
            "low-credit-probability",
            self.low_credit_probability.is_some(),
            limits.low_credit_probability,
        );
        print_entry(
            "min-delay-ms",
            self.min_delay_ms.is_some(),
            limits.min_delay.as_millis(),
        );
        print_entry(
            "max-delay-ms",
            self.max_delay_ms.is_some(),
            limits.max_delay.as_millis(),
        );
        print_entry("membership", self.membership.is_some(), self.membership().title());
    }
}

fn print_entry(key: &str, is_set: bool, value: impl std::fmt::Display) {
    if is_set {
        println!("  {key}: {value}");
    } else {
        println!("  {key}: {value} (default)");
    }
}
