use super::{App, AppAction, AppCommand};
use crate::commands::{process_input, CommandResult};
use crate::core::session::TurnOutcome;

pub(super) fn handle_chat_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::InsertChar { ch } => {
            app.session.push_input(ch);
            None
        }
        AppAction::Backspace => {
            app.session.pop_input();
            None
        }
        AppAction::ClearInput => {
            app.session.set_input("");
            None
        }
        AppAction::Submit => submit_input(app),
        AppAction::RequestSmartMatch { kind } => {
            let outcome = app.session.request_smart_match(kind);
            app.schedule(outcome)
        }
        AppAction::TurnTimerElapsed { turn_id } => {
            if app.session.resolve_turn(turn_id) != TurnOutcome::Stale {
                app.ui.scroll_to_bottom();
            }
            None
        }
        AppAction::PurchaseCredits => {
            app.session.purchase_credits();
            None
        }
        AppAction::UpgradeMembership => {
            app.session.upgrade_membership();
            None
        }
        AppAction::SetMembership { tier } => {
            app.set_membership(tier);
            None
        }
        AppAction::CycleMembership => {
            let next = app.session.membership().cycle();
            app.set_membership(next);
            None
        }
        AppAction::ToggleDeepResearch => {
            if !app.session.toggle_deep_research() {
                app.ui.set_status("Deep research needs AliveGPT Plus or higher");
            }
            None
        }
        AppAction::DismissAlert => {
            app.session.dismiss_alert();
            None
        }
        AppAction::StartNewChat => {
            app.session.start_new_chat();
            app.ui.scroll_to_bottom();
            app.ui.clear_status();
            None
        }
        AppAction::RemoveAttachment { index } => {
            if app.session.remove_attachment(index) == 0 {
                app.ui.set_status(format!("No attachment at position {}", index + 1));
            }
            None
        }
        AppAction::ScrollUp { lines } => {
            app.ui.scroll_up(lines);
            None
        }
        AppAction::ScrollDown { lines } => {
            app.ui.scroll_down(lines);
            None
        }
        AppAction::SetStatus { message } => {
            app.ui.set_status(message);
            None
        }
        AppAction::ClearStatus => {
            app.ui.clear_status();
            None
        }
        AppAction::OpenScreen { screen } => {
            app.open_screen(screen);
            None
        }
        AppAction::RequestExit => {
            app.request_exit();
            None
        }
        _ => unreachable!("non-chat action routed to chat handler"),
    }
}

fn submit_input(app: &mut App) -> Option<AppCommand> {
    let input = app.session.input().to_string();
    match process_input(app, &input) {
        CommandResult::ProcessAsMessage => {
            let outcome = app.session.submit();
            app.schedule(outcome)
        }
        CommandResult::Turn(outcome) => {
            app.session.set_input("");
            app.schedule(outcome)
        }
        CommandResult::Continue => {
            app.session.set_input("");
            None
        }
    }
}
