use super::{App, AppAction, AppCommand};
use crate::core::app::Screen;

pub(super) fn handle_history_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::HistoryMoveUp => {
            app.ui.history_selected = app.ui.history_selected.saturating_sub(1);
        }
        AppAction::HistoryMoveDown => {
            let visible = app.history.search().len();
            if app.ui.history_selected + 1 < visible {
                app.ui.history_selected += 1;
            }
        }
        AppAction::HistoryTypeChar { ch } => {
            app.history.push_query(ch);
            app.ui.history_selected = 0;
        }
        AppAction::HistoryBackspace => {
            app.history.pop_query();
            app.ui.history_selected = 0;
        }
        AppAction::HistoryRequestDelete => {
            let selected = app
                .history
                .search()
                .get(app.ui.history_selected)
                .map(|entry| entry.id);
            if let Some(id) = selected {
                app.history.request_delete(id);
            }
        }
        AppAction::HistoryRequestDeleteAll => {
            if !app.history.is_empty() {
                app.history.request_delete_all();
            }
        }
        AppAction::HistoryConfirm => {
            app.history.confirm();
            let visible = app.history.search().len();
            app.ui.history_selected = app.ui.history_selected.min(visible.saturating_sub(1));
        }
        AppAction::HistoryCancel => {
            app.history.cancel();
        }
        AppAction::HistoryNewChat => {
            if app.history.request_new_chat() {
                app.session.start_new_chat();
                app.ui.scroll_to_bottom();
                app.ui.screen = Screen::Chat;
            }
        }
        _ => unreachable!("non-history action routed to history handler"),
    }
    None
}
