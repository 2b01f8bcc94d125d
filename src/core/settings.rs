//! Account settings: personalization and data export.

use tracing::info;

pub const EXPORT_PROMPT_TITLE: &str = "Request data export - are you sure?";
pub const EXPORT_PROMPT_DETAILS: &[&str] = &[
    "Your account details and chats will be included in the export.",
    "To proceed, click \"Confirm export\" below.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub personalization: bool,
    export_prompt_open: bool,
    export_requested: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            personalization: true,
            export_prompt_open: false,
            export_requested: false,
        }
    }
}

impl Settings {
    pub fn toggle_personalization(&mut self) -> bool {
        self.personalization = !self.personalization;
        self.personalization
    }

    pub fn request_export(&mut self) {
        self.export_prompt_open = true;
    }

    pub fn confirm_export(&mut self) {
        if !self.export_prompt_open {
            return;
        }
        self.export_prompt_open = false;
        self.export_requested = true;
        info!("data export requested");
    }

    pub fn cancel_export(&mut self) {
        self.export_prompt_open = false;
    }

    pub fn is_export_prompt_open(&self) -> bool {
        self.export_prompt_open
    }

    pub fn export_requested(&self) -> bool {
        self.export_requested
    }
}
