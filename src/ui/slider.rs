use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::core::range::{Handle, RangeSelection};

const TRACK: &str = "─";
const FILL: &str = "━";
const KNOB: &str = "●";

/// Cell offsets of the two handles on a track `width` cells wide.
pub fn handle_columns(range: &RangeSelection, width: u16) -> (u16, u16) {
    let span = f64::from(width.saturating_sub(1));
    let column = |normalized: f64| (normalized.clamp(0.0, 1.0) * span).round() as u16;
    (
        column(range.normalized_lower()),
        column(range.normalized_upper()),
    )
}

/// Maps an absolute terminal column to a `(position, track_width)` pair in
/// the units the range expects. `None` when the track is too small to use.
pub fn track_position(track: Rect, column: u16) -> Option<(u16, u16)> {
    if track.width < 2 {
        return None;
    }
    let offset = column.saturating_sub(track.x);
    Some((offset, track.width - 1))
}

/// One-row two-handle slider.
pub struct RangeSlider<'a> {
    range: &'a RangeSelection,
    grabbed: Option<Handle>,
    disabled: bool,
}

impl<'a> RangeSlider<'a> {
    pub fn new(range: &'a RangeSelection) -> Self {
        Self {
            range,
            grabbed: None,
            disabled: false,
        }
    }

    pub fn grabbed(mut self, handle: Option<Handle>) -> Self {
        self.grabbed = handle;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn knob_style(&self, handle: Handle) -> Style {
        if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.grabbed == Some(handle) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }
}

impl Widget for RangeSlider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let (lower, upper) = handle_columns(self.range, area.width);
        let fill_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        for offset in 0..area.width {
            let (symbol, style) = if (lower..=upper).contains(&offset) {
                (FILL, fill_style)
            } else {
                (TRACK, Style::default().fg(Color::DarkGray))
            };
            buf[(area.x + offset, area.y)]
                .set_symbol(symbol)
                .set_style(style);
        }
        buf[(area.x + lower, area.y)]
            .set_symbol(KNOB)
            .set_style(self.knob_style(Handle::Lower));
        buf[(area.x + upper, area.y)]
            .set_symbol(KNOB)
            .set_style(self.knob_style(Handle::Upper));
    }
}
