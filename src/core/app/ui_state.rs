use std::time::Instant;

use crate::core::preferences::Question;
use crate::core::range::{FeedbackSink, Handle};

/// Top-level screen shown by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Chat,
    Quiz,
    History,
    Settings,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Chat => "Chat",
            Screen::Quiz => "Smart Matching",
            Screen::History => "Chat History",
            Screen::Settings => "Settings",
        }
    }
}

/// Records which slider handle last committed a value so the renderer can
/// flash it.
#[derive(Debug, Default)]
pub struct HandlePulse {
    pub last: Option<Handle>,
    pub count: usize,
}

impl FeedbackSink for HandlePulse {
    fn notify(&mut self, handle: Handle) {
        self.last = Some(handle);
        self.count += 1;
    }
}

#[derive(Debug)]
pub struct UiState {
    pub screen: Screen,
    pub status: Option<String>,
    pub status_set_at: Option<Instant>,
    pub exit_requested: bool,
    /// Lines scrolled up from the newest message. Zero keeps the view pinned
    /// to the bottom.
    pub scroll_from_bottom: u16,
    pub quiz_question: Question,
    /// Handle grabbed by a mouse press on the slider track.
    pub drag_handle: Option<Handle>,
    pub slider_pulse: HandlePulse,
    pub history_selected: usize,
    pub last_term_width: u16,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Chat,
            status: None,
            status_set_at: None,
            exit_requested: false,
            scroll_from_bottom: 0,
            quiz_question: Question::Gender,
            drag_handle: None,
            slider_pulse: HandlePulse::default(),
            history_selected: 0,
            last_term_width: 0,
        }
    }
}

impl UiState {
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
        self.status_set_at = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.status_set_at = None;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_saturates_at_bottom() {
        let mut ui = UiState::default();
        ui.scroll_down(3);
        assert_eq!(ui.scroll_from_bottom, 0);
        ui.scroll_up(5);
        ui.scroll_down(2);
        assert_eq!(ui.scroll_from_bottom, 3);
        ui.scroll_to_bottom();
        assert_eq!(ui.scroll_from_bottom, 0);
    }

    #[test]
    fn status_records_time() {
        let mut ui = UiState::default();
        ui.set_status("Saved");
        assert_eq!(ui.status.as_deref(), Some("Saved"));
        assert!(ui.status_set_at.is_some());
        ui.clear_status();
        assert!(ui.status.is_none());
    }

    #[test]
    fn pulse_counts_commits() {
        let mut pulse = HandlePulse::default();
        pulse.notify(Handle::Lower);
        pulse.notify(Handle::Upper);
        assert_eq!(pulse.last, Some(Handle::Upper));
        assert_eq!(pulse.count, 2);
    }
}
