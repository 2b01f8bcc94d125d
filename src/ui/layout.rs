//! Screen geometry shared by the renderer and the mouse mapping, so a click
//! lands on the same cells the slider was drawn in.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::preferences::Question;

/// Rows used by the bordered input box.
pub const INPUT_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenLayout {
        header,
        body,
        footer,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub transcript: Rect,
    pub attachments: Rect,
    pub input: Rect,
}

/// Splits the chat body. The attachment row collapses when the tray is empty.
pub fn chat_layout(body: Rect, has_attachments: bool) -> ChatLayout {
    let tray_height = u16::from(has_attachments);
    let [transcript, attachments, input] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(tray_height),
        Constraint::Length(INPUT_HEIGHT),
    ])
    .areas(body);
    ChatLayout {
        transcript,
        attachments,
        input,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLayout {
    pub questions: Rect,
    pub slider: Rect,
    /// Row of cells the slider handles travel along.
    pub track: Rect,
}

pub fn quiz_layout(body: Rect) -> QuizLayout {
    let questions_height = Question::ALL.len() as u16 + 2;
    let [questions, slider, _] = Layout::vertical([
        Constraint::Length(questions_height),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(body);
    let track = Rect {
        x: slider.x.saturating_add(2),
        y: slider.y.saturating_add(1),
        width: slider.width.saturating_sub(4),
        height: u16::from(slider.height > 2),
    };
    QuizLayout {
        questions,
        slider,
        track,
    }
}

/// Centered popup of at most `width` x `height` cells.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_layout_collapses_empty_tray() {
        let body = Rect::new(0, 1, 80, 22);
        let layout = chat_layout(body, false);
        assert_eq!(layout.attachments.height, 0);
        assert_eq!(layout.input.height, INPUT_HEIGHT);
        assert_eq!(layout.transcript.height, 19);

        let layout = chat_layout(body, true);
        assert_eq!(layout.attachments.height, 1);
        assert_eq!(layout.transcript.height, 18);
    }

    #[test]
    fn quiz_track_sits_inside_slider_box() {
        let body = Rect::new(0, 1, 80, 22);
        let layout = quiz_layout(body);
        assert_eq!(layout.questions.height, 10);
        assert_eq!(layout.slider.y, 11);
        assert_eq!(layout.track, Rect::new(2, 12, 76, 1));
    }

    #[test]
    fn popup_never_exceeds_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(area, 60, 10), area);
        assert_eq!(centered_rect(area, 10, 3), Rect::new(5, 1, 10, 3));
    }
}
