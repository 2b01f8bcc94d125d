use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::app::{App, Screen};
use crate::core::constants::MAX_SAVED_CHATS;
use crate::core::history::{HistoryPrompt, MAX_CHATS_HINT, MAX_CHATS_NOTICE};
use crate::core::message::{Author, ChatMessage};
use crate::core::preferences::Question;
use crate::core::session::{Alert, ChatSession};
use crate::core::settings::{EXPORT_PROMPT_DETAILS, EXPORT_PROMPT_TITLE};
use crate::core::smart_match::MatchCard;
use crate::ui::layout::{centered_rect, chat_layout, quiz_layout, screen_layout};
use crate::ui::slider::RangeSlider;

pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());

    f.render_widget(Paragraph::new(header_line(app)), layout.header);

    match app.ui.screen {
        Screen::Chat => render_chat(f, app, layout.body),
        Screen::Quiz => render_quiz(f, app, layout.body),
        Screen::History => render_history(f, app, layout.body),
        Screen::Settings => render_settings(f, app, layout.body),
    }

    f.render_widget(Paragraph::new(footer_line(app)), layout.footer);

    if let Some(alert) = app.session.alert() {
        render_alert(f, alert, &app.session);
    }
}

fn header_line(app: &App) -> Line<'static> {
    let session = &app.session;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", session.membership().title()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} ", app.ui.screen.title())),
        Span::styled(
            format!("• Credits: {} ", session.credits()),
            credit_style(session),
        ),
    ];
    if session.deep_research() {
        spans.push(Span::styled(
            "• Deep research ",
            Style::default().fg(Color::Magenta),
        ));
    }
    Line::from(spans)
}

fn credit_style(session: &ChatSession) -> Style {
    let credits = session.credits();
    if credits <= 0 {
        Style::default().fg(Color::Red)
    } else if credits <= session.limits().low_credit_threshold {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn footer_line(app: &App) -> Line<'static> {
    if let Some(status) = &app.ui.status {
        return Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }
    let hints = match app.ui.screen {
        Screen::Chat => "F1 chat  F2 quiz  F3 history  F4 settings  /help commands  Ctrl+C quit",
        Screen::Quiz => "↑↓ question  ←→ answer  Space no preference  Enter save  Esc back",
        Screen::History => "type to search  ↑↓ select  Del delete  Ctrl+X delete all  Ctrl+N new chat",
        Screen::Settings => "p personalization  e export data  Esc back",
    };
    Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
}

fn render_chat(f: &mut Frame, app: &App, body: Rect) {
    let session = &app.session;
    let layout = chat_layout(body, !session.attachments().is_empty());

    let lines = transcript_lines(session.messages());
    let visible = layout.transcript.height;
    let total = wrapped_height(&lines, layout.transcript.width);
    let max_offset = total.saturating_sub(visible);
    let offset = max_offset.saturating_sub(app.ui.scroll_from_bottom);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        layout.transcript,
    );

    if layout.attachments.height > 0 {
        f.render_widget(
            Paragraph::new(attachment_line(session)).style(Style::default().fg(Color::Blue)),
            layout.attachments,
        );
    }

    let title = if session.is_turn_in_flight() {
        "AliveGPT is replying..."
    } else {
        "Message AliveGPT (Enter to send)"
    };
    let input = Paragraph::new(session.input()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title),
    );
    f.render_widget(input, layout.input);

    if session.alert().is_none() {
        let inner_width = layout.input.width.saturating_sub(2);
        let cursor = (session.input().width() as u16).min(inner_width.saturating_sub(1));
        f.set_cursor_position((layout.input.x + 1 + cursor, layout.input.y + 1));
    }
}

fn transcript_lines(messages: &[ChatMessage]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        let (name, name_style) = match message.author {
            Author::User => ("You", Style::default().fg(Color::Green)),
            Author::Assistant => ("AliveGPT", Style::default().fg(Color::Cyan)),
        };
        let text_style = if message.placeholder {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{name}: "), name_style.add_modifier(Modifier::BOLD)),
            Span::styled(message.text.clone(), text_style),
        ]));
        for image in message.images.iter().flatten() {
            lines.push(Line::from(format!("  [image] {image}")));
        }
        for document in message.documents.iter().flatten() {
            lines.push(Line::from(format!("  [file] {document}")));
        }
        if let Some(card) = &message.smart_match {
            lines.extend(card_lines(card));
        }
        lines.push(Line::default());
    }
    lines
}

fn card_lines(card: &MatchCard) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("  ┌ {} ", card.matching_label()),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(format!("{}% match", card.match_percentage), dim),
        ]),
        Line::from(Span::styled(
            format!("  │ {}", card.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "  │ {} ({}) ★ {:.1} ({} reviews)",
            card.instructor_name, card.instructor_tier, card.rating, card.review_count
        )),
    ];
    let mut details = Vec::new();
    if let Some(date) = &card.date {
        details.push(date.clone());
    }
    if let Some(minutes) = card.duration_minutes {
        details.push(format!("{minutes} min"));
    }
    if let Some(attendees) = &card.attendees {
        details.push(attendees.clone());
    }
    if let Some(period) = &card.access_period {
        details.push(period.clone());
    }
    if let Some(members) = card.member_count {
        details.push(format!("{members} members"));
    }
    if let Some(bought) = card.bought_count {
        details.push(format!("{bought} bought"));
    }
    if !details.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  │ {}", details.join(" • ")),
            dim,
        )));
    }
    lines.push(Line::from(format!("  │ {}", card.description)));
    let heart = if card.favorited { " ♥" } else { "" };
    lines.push(Line::from(format!(
        "  └ {} credits{heart}",
        card.credits
    )));
    lines
}

fn attachment_line(session: &ChatSession) -> String {
    let tray = session.attachments();
    let mut parts = Vec::new();
    let numbered = |items: Vec<String>| {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| format!("{}.{item}", index + 1))
            .collect::<Vec<_>>()
            .join(" ")
    };
    if !tray.camera().is_empty() {
        let items = tray.camera().iter().map(ToString::to_string).collect();
        parts.push(format!("Camera: {}", numbered(items)));
    }
    if !tray.photos().is_empty() {
        let items = tray.photos().iter().map(ToString::to_string).collect();
        parts.push(format!("Photos: {}", numbered(items)));
    }
    if !tray.documents().is_empty() {
        let items = tray.documents().iter().map(ToString::to_string).collect();
        parts.push(format!("Files: {}", numbered(items)));
    }
    format!("Attached: {}", parts.join(" | "))
}

/// Rows `lines` occupy once wrapped to `width` cells.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Rows a plain string needs under greedy word wrapping.
fn word_wrapped_rows(text: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if used == 0 { word_width } else { used + 1 + word_width };
        if needed <= width {
            used = needed;
        } else {
            rows += 1;
            used = word_width;
            while used > width {
                rows += 1;
                used -= width;
            }
        }
    }
    rows
}

fn render_quiz(f: &mut Frame, app: &App, body: Rect) {
    let layout = quiz_layout(body);
    let preferences = &app.preferences;

    let items: Vec<ListItem> = Question::ALL
        .iter()
        .map(|question| {
            let mut spans = vec![
                Span::raw(format!("{} ", question.prompt())),
                Span::styled(
                    preferences.answer(*question),
                    Style::default().fg(Color::Cyan),
                ),
            ];
            if question.has_no_preference_flag() {
                let mark = if preferences.no_preference(*question) {
                    "[x]"
                } else {
                    "[ ]"
                };
                spans.push(Span::styled(
                    format!("  {mark} No preference"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let selected = Question::ALL
        .iter()
        .position(|question| *question == app.ui.quiz_question);
    let title = if preferences.is_saved() {
        "Smart matching preferences (saved)"
    } else {
        "Smart matching preferences"
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, layout.questions, &mut state);

    let range = &preferences.credit_range;
    let slider_block = Block::default()
        .borders(Borders::ALL)
        .title(Question::CreditRange.prompt());
    f.render_widget(slider_block, layout.slider);
    f.render_widget(
        RangeSlider::new(range)
            .grabbed(app.ui.drag_handle.or(app.ui.slider_pulse.last))
            .disabled(preferences.no_credit_range),
        layout.track,
    );
    let label_area = Rect {
        y: layout.track.y + 1,
        ..layout.track
    };
    if label_area.bottom() < layout.slider.bottom() {
        f.render_widget(
            Paragraph::new(format!(
                "{:.0} - {:.0} credits",
                range.lower(),
                range.upper()
            )),
            label_area,
        );
    }
}

fn render_history(f: &mut Frame, app: &App, body: Rect) {
    let history = &app.history;
    let search = Paragraph::new(history.query().to_string())
        .block(Block::default().borders(Borders::ALL).title("Search chats"));
    let search_area = Rect { height: 3, ..body };
    f.render_widget(search, search_area);

    let list_area = Rect {
        y: body.y + 3,
        height: body.height.saturating_sub(3),
        ..body
    };
    let entries = history.search();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        entry.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", entry.created_at.format("%b %d, %Y")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(format!("  {}", entry.description)),
            ])
        })
        .collect();
    let title = format!("Chats ({}/{MAX_SAVED_CHATS})", history.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let selected = (!entries.is_empty()).then_some(app.ui.history_selected);
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, list_area, &mut state);

    if let Some(prompt) = history.prompt() {
        let (title, lines) = match prompt {
            HistoryPrompt::DeleteChat { .. } => (
                "Delete chat?",
                vec!["This chat will be permanently deleted.".to_string()],
            ),
            HistoryPrompt::DeleteAll => (
                "Delete all chats?",
                vec!["Every saved chat will be permanently deleted.".to_string()],
            ),
            HistoryPrompt::MaxChats => (
                "Chat limit",
                vec![MAX_CHATS_NOTICE.to_string(), MAX_CHATS_HINT.to_string()],
            ),
        };
        let hint = match prompt {
            HistoryPrompt::MaxChats => "[Esc] Close",
            _ => "[Enter] Delete  [Esc] Cancel",
        };
        render_popup(f, title, lines, hint);
    }
}

fn render_settings(f: &mut Frame, app: &App, body: Rect) {
    let settings = &app.settings;
    let on_off = if settings.personalization { "On" } else { "Off" };
    let export = if settings.export_requested() {
        "Requested"
    } else {
        "Not requested"
    };
    let lines = vec![
        Line::from(format!("Membership: {}", app.session.membership().title())),
        Line::default(),
        Line::from(format!("[p] Personalization: {on_off}")),
        Line::from(format!("[e] Data export: {export}")),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Settings")),
        body,
    );

    if settings.is_export_prompt_open() {
        let details = EXPORT_PROMPT_DETAILS.iter().map(|line| line.to_string()).collect();
        render_popup(f, EXPORT_PROMPT_TITLE, details, "[Enter] Confirm  [Esc] Cancel");
    }
}

fn render_alert(f: &mut Frame, alert: &Alert, session: &ChatSession) {
    let mut lines = vec![alert.body().to_string()];
    if alert.shows_balance() {
        lines.push(String::new());
        lines.push(format!("Balance: {} credits", session.credits()));
    }
    let hint = if alert.offers_purchase() {
        format!(
            "[b] Buy {} credits  [u] Upgrade  [Esc] Close",
            session.limits().purchase_credits
        )
    } else if matches!(alert, Alert::ChatLimitReached) {
        "[n] New chat  [Esc] Close".to_string()
    } else {
        "[Enter] OK".to_string()
    };
    render_popup(f, alert.title(), lines, &hint);
}

fn render_popup(f: &mut Frame, title: &str, body: Vec<String>, hint: &str) {
    let area = f.area();
    let width = area.width.saturating_sub(8).min(64);
    let inner_width = usize::from(width.saturating_sub(2).max(1));
    let rows: usize = body
        .iter()
        .chain(std::iter::once(&hint.to_string()))
        .map(|text| word_wrapped_rows(text, inner_width))
        .sum::<usize>()
        + 1;
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_rect(area, width, height);

    let mut lines: Vec<Line> = body.into_iter().map(Line::from).collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(title.to_string()),
            ),
        popup,
    );
}
