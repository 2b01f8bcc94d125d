//! Maps terminal input to app actions for the screen currently shown.
//!
//! Mapping is pure: it reads the app and returns actions, leaving every
//! mutation to the action queue.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::core::app::{App, AppAction, Screen};
use crate::core::history::HistoryPrompt;
use crate::core::preferences::Question;
use crate::core::range::Handle;
use crate::core::session::Alert;
use crate::ui::layout::{quiz_layout, screen_layout};
use crate::ui::slider::track_position;

const SCROLL_LINES: u16 = 3;

pub fn actions_for_key(app: &App, key: KeyEvent) -> Vec<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![AppAction::RequestExit];
    }

    if let Some(alert) = app.session.alert() {
        return alert_keys(alert, key);
    }

    if let Some(screen) = screen_for_function_key(key.code) {
        return vec![AppAction::OpenScreen { screen }];
    }

    match app.ui.screen {
        Screen::Chat => chat_keys(key, ctrl),
        Screen::Quiz => quiz_keys(app, key),
        Screen::History => history_keys(app, key, ctrl),
        Screen::Settings => settings_keys(app, key),
    }
}

fn screen_for_function_key(code: KeyCode) -> Option<Screen> {
    match code {
        KeyCode::F(1) => Some(Screen::Chat),
        KeyCode::F(2) => Some(Screen::Quiz),
        KeyCode::F(3) => Some(Screen::History),
        KeyCode::F(4) => Some(Screen::Settings),
        _ => None,
    }
}

fn alert_keys(alert: &Alert, key: KeyEvent) -> Vec<AppAction> {
    match key.code {
        KeyCode::Char('b') if alert.offers_purchase() => vec![AppAction::PurchaseCredits],
        KeyCode::Char('u') if alert.offers_purchase() => vec![
            AppAction::UpgradeMembership,
            AppAction::SetStatus {
                message: "Use /tier or Ctrl+T to change membership".to_string(),
            },
        ],
        KeyCode::Char('n') if matches!(alert, Alert::ChatLimitReached) => {
            vec![AppAction::StartNewChat]
        }
        KeyCode::Enter | KeyCode::Esc => vec![AppAction::DismissAlert],
        _ => Vec::new(),
    }
}

fn chat_keys(key: KeyEvent, ctrl: bool) -> Vec<AppAction> {
    if ctrl {
        return match key.code {
            KeyCode::Char('n') => vec![AppAction::StartNewChat],
            KeyCode::Char('d') => vec![AppAction::ToggleDeepResearch],
            KeyCode::Char('t') => vec![AppAction::CycleMembership],
            KeyCode::Char('b') => vec![AppAction::PurchaseCredits],
            KeyCode::Char('u') => vec![AppAction::ClearInput],
            _ => Vec::new(),
        };
    }
    match key.code {
        KeyCode::Enter => vec![AppAction::ClearStatus, AppAction::Submit],
        KeyCode::Backspace => vec![AppAction::Backspace],
        KeyCode::Esc => vec![AppAction::ClearStatus],
        KeyCode::PageUp => vec![AppAction::ScrollUp { lines: 10 }],
        KeyCode::PageDown => vec![AppAction::ScrollDown { lines: 10 }],
        KeyCode::Up => vec![AppAction::ScrollUp { lines: 1 }],
        KeyCode::Down => vec![AppAction::ScrollDown { lines: 1 }],
        KeyCode::Char(ch) => vec![AppAction::InsertChar { ch }],
        _ => Vec::new(),
    }
}

fn quiz_keys(app: &App, key: KeyEvent) -> Vec<AppAction> {
    let on_slider = app.ui.quiz_question == Question::CreditRange;
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Up => vec![AppAction::QuizPreviousQuestion],
        KeyCode::Down | KeyCode::Tab => vec![AppAction::QuizNextQuestion],
        KeyCode::BackTab => vec![AppAction::QuizPreviousQuestion],
        KeyCode::Left | KeyCode::Right if on_slider => {
            let handle = if shift { Handle::Upper } else { Handle::Lower };
            let steps = if key.code == KeyCode::Left { -1 } else { 1 };
            vec![AppAction::QuizNudge { handle, steps }]
        }
        KeyCode::Left => vec![AppAction::QuizCycleAnswer { forward: false }],
        KeyCode::Right => vec![AppAction::QuizCycleAnswer { forward: true }],
        KeyCode::Char(' ') => vec![AppAction::QuizToggleNoPreference],
        KeyCode::Enter => vec![AppAction::QuizSave],
        KeyCode::Esc => vec![AppAction::OpenScreen {
            screen: Screen::Chat,
        }],
        _ => Vec::new(),
    }
}

fn history_keys(app: &App, key: KeyEvent, ctrl: bool) -> Vec<AppAction> {
    if let Some(prompt) = app.history.prompt() {
        return match (prompt, key.code) {
            (HistoryPrompt::MaxChats, KeyCode::Enter | KeyCode::Esc) => {
                vec![AppAction::HistoryCancel]
            }
            (HistoryPrompt::MaxChats, _) => Vec::new(),
            (_, KeyCode::Enter | KeyCode::Char('y')) => vec![AppAction::HistoryConfirm],
            (_, KeyCode::Esc | KeyCode::Char('n')) => vec![AppAction::HistoryCancel],
            _ => Vec::new(),
        };
    }
    if ctrl {
        return match key.code {
            KeyCode::Char('n') => vec![AppAction::HistoryNewChat],
            KeyCode::Char('x') => vec![AppAction::HistoryRequestDeleteAll],
            _ => Vec::new(),
        };
    }
    match key.code {
        KeyCode::Up => vec![AppAction::HistoryMoveUp],
        KeyCode::Down => vec![AppAction::HistoryMoveDown],
        KeyCode::Delete => vec![AppAction::HistoryRequestDelete],
        KeyCode::Backspace => vec![AppAction::HistoryBackspace],
        KeyCode::Esc => vec![AppAction::OpenScreen {
            screen: Screen::Chat,
        }],
        KeyCode::Char(ch) => vec![AppAction::HistoryTypeChar { ch }],
        _ => Vec::new(),
    }
}

fn settings_keys(app: &App, key: KeyEvent) -> Vec<AppAction> {
    if app.settings.is_export_prompt_open() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y') => vec![AppAction::SettingsConfirmExport],
            KeyCode::Esc | KeyCode::Char('n') => vec![AppAction::SettingsCancelExport],
            _ => Vec::new(),
        };
    }
    match key.code {
        KeyCode::Char('p') | KeyCode::Char(' ') => vec![AppAction::SettingsTogglePersonalization],
        KeyCode::Char('e') => vec![AppAction::SettingsRequestExport],
        KeyCode::Esc => vec![AppAction::OpenScreen {
            screen: Screen::Chat,
        }],
        _ => Vec::new(),
    }
}

/// Wheel scrolls the transcript; on the quiz, left-button presses and drags
/// on the slider track move the nearest handle.
pub fn actions_for_mouse(app: &App, mouse: MouseEvent, area: Rect) -> Vec<AppAction> {
    if app.session.alert().is_some() {
        return Vec::new();
    }
    match (app.ui.screen, mouse.kind) {
        (Screen::Chat, MouseEventKind::ScrollUp) => vec![AppAction::ScrollUp {
            lines: SCROLL_LINES,
        }],
        (Screen::Chat, MouseEventKind::ScrollDown) => vec![AppAction::ScrollDown {
            lines: SCROLL_LINES,
        }],
        (Screen::Quiz, kind) => slider_mouse(app, kind, mouse.column, mouse.row, area),
        _ => Vec::new(),
    }
}

fn slider_mouse(
    app: &App,
    kind: MouseEventKind,
    column: u16,
    row: u16,
    area: Rect,
) -> Vec<AppAction> {
    let track = quiz_layout(screen_layout(area).body).track;
    let Some((column, track_width)) = track_position(track, column) else {
        return Vec::new();
    };
    match kind {
        MouseEventKind::Down(MouseButton::Left) if row == track.y => {
            vec![AppAction::QuizPress {
                column,
                track_width,
            }]
        }
        MouseEventKind::Drag(MouseButton::Left) if app.ui.drag_handle.is_some() => {
            vec![AppAction::QuizDrag {
                column,
                track_width,
            }]
        }
        MouseEventKind::Up(MouseButton::Left) if app.ui.drag_handle.is_some() => {
            vec![AppAction::QuizRelease]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::membership::Membership;
    use crate::utils::test_utils::{create_scripted_app, create_test_app};
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn ctrl_c_exits_from_any_screen() {
        let mut app = create_test_app();
        app.session.purchase_credits();
        assert!(matches!(
            actions_for_key(&app, ctrl('c')).as_slice(),
            [AppAction::RequestExit]
        ));
    }

    #[test]
    fn typing_on_chat_inserts_characters() {
        let app = create_test_app();
        assert!(matches!(
            actions_for_key(&app, key(KeyCode::Char('h'))).as_slice(),
            [AppAction::InsertChar { ch: 'h' }]
        ));
        assert!(matches!(
            actions_for_key(&app, key(KeyCode::Enter)).as_slice(),
            [AppAction::ClearStatus, AppAction::Submit]
        ));
    }

    #[test]
    fn alert_captures_keys() {
        let mut app = create_test_app();
        app.session.purchase_credits();
        assert!(actions_for_key(&app, key(KeyCode::Char('h'))).is_empty());
        assert!(actions_for_key(&app, key(KeyCode::Char('b'))).is_empty());
        assert!(matches!(
            actions_for_key(&app, key(KeyCode::Esc)).as_slice(),
            [AppAction::DismissAlert]
        ));
    }

    #[test]
    fn quiz_arrows_nudge_slider_on_price_question() {
        let mut app = create_scripted_app(Membership::Plus, []);
        app.ui.screen = Screen::Quiz;
        assert!(matches!(
            actions_for_key(&app, key(KeyCode::Right)).as_slice(),
            [AppAction::QuizCycleAnswer { forward: true }]
        ));

        app.ui.quiz_question = Question::CreditRange;
        let shifted = KeyEvent {
            modifiers: KeyModifiers::SHIFT,
            ..key(KeyCode::Left)
        };
        assert!(matches!(
            actions_for_key(&app, shifted).as_slice(),
            [AppAction::QuizNudge {
                handle: Handle::Upper,
                steps: -1
            }]
        ));
    }

    #[test]
    fn history_prompt_takes_confirm_keys() {
        let mut app = create_test_app();
        app.ui.screen = Screen::History;
        assert!(matches!(
            actions_for_key(&app, key(KeyCode::Char('y'))).as_slice(),
            [AppAction::HistoryTypeChar { ch: 'y' }]
        ));

        app.history.request_delete_all();
        assert!(matches!(
            actions_for_key(&app, key(KeyCode::Char('y'))).as_slice(),
            [AppAction::HistoryConfirm]
        ));
    }

    #[test]
    fn press_on_track_maps_to_relative_column() {
        let mut app = create_scripted_app(Membership::Plus, []);
        app.ui.screen = Screen::Quiz;
        let area = Rect::new(0, 0, 80, 24);

        let press = mouse(MouseEventKind::Down(MouseButton::Left), 12, 12);
        let actions = actions_for_mouse(&app, press, area);
        assert!(matches!(
            actions.as_slice(),
            [AppAction::QuizPress {
                column: 10,
                track_width: 75
            }]
        ));

        let off_track = mouse(MouseEventKind::Down(MouseButton::Left), 12, 5);
        assert!(actions_for_mouse(&app, off_track, area).is_empty());

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 3);
        assert!(actions_for_mouse(&app, drag, area).is_empty());

        app.ui.drag_handle = Some(Handle::Lower);
        assert!(matches!(
            actions_for_mouse(&app, drag, area).as_slice(),
            [AppAction::QuizDrag {
                column: 28,
                track_width: 75
            }]
        ));
    }
}
