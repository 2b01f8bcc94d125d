mod chat;
mod history;
mod quiz;
mod settings;

use tokio::sync::mpsc;

use super::{App, Screen};
use crate::core::membership::Membership;
use crate::core::range::Handle;
use crate::core::session::ScheduledTurn;
use crate::core::smart_match::MatchKind;

pub enum AppAction {
    InsertChar {
        ch: char,
    },
    Backspace,
    ClearInput,
    Submit,
    RequestSmartMatch {
        kind: MatchKind,
    },
    TurnTimerElapsed {
        turn_id: u64,
    },
    PurchaseCredits,
    UpgradeMembership,
    SetMembership {
        tier: Membership,
    },
    CycleMembership,
    ToggleDeepResearch,
    DismissAlert,
    StartNewChat,
    RemoveAttachment {
        index: usize,
    },
    ScrollUp {
        lines: u16,
    },
    ScrollDown {
        lines: u16,
    },
    SetStatus {
        message: String,
    },
    ClearStatus,
    OpenScreen {
        screen: Screen,
    },
    RequestExit,
    QuizNextQuestion,
    QuizPreviousQuestion,
    QuizCycleAnswer {
        forward: bool,
    },
    QuizToggleNoPreference,
    QuizSave,
    QuizPress {
        column: u16,
        track_width: u16,
    },
    QuizDrag {
        column: u16,
        track_width: u16,
    },
    QuizRelease,
    QuizNudge {
        handle: Handle,
        steps: i32,
    },
    HistoryMoveUp,
    HistoryMoveDown,
    HistoryTypeChar {
        ch: char,
    },
    HistoryBackspace,
    HistoryRequestDelete,
    HistoryRequestDeleteAll,
    HistoryConfirm,
    HistoryCancel,
    HistoryNewChat,
    SettingsTogglePersonalization,
    SettingsRequestExport,
    SettingsConfirmExport,
    SettingsCancelExport,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppActionContext {
    pub term_width: u16,
    pub term_height: u16,
}

pub struct AppActionEnvelope {
    pub action: AppAction,
    pub context: AppActionContext,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppActionEnvelope>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppActionEnvelope>) -> Self {
        Self { tx }
    }

    pub fn dispatch_many<I>(&self, actions: I, ctx: AppActionContext)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(AppActionEnvelope {
                action,
                context: ctx,
            });
        }
    }
}

pub enum AppCommand {
    /// Start the timer for a turn; dispatch `TurnTimerElapsed` when it fires.
    ScheduleTurn(ScheduledTurn),
}

pub fn apply_actions(
    app: &mut App,
    envelopes: impl IntoIterator<Item = AppActionEnvelope>,
) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for envelope in envelopes {
        if let Some(cmd) = apply_action(app, envelope.action, envelope.context) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction, ctx: AppActionContext) -> Option<AppCommand> {
    app.ui.last_term_width = ctx.term_width;
    match action {
        AppAction::InsertChar { .. }
        | AppAction::Backspace
        | AppAction::ClearInput
        | AppAction::Submit
        | AppAction::RequestSmartMatch { .. }
        | AppAction::TurnTimerElapsed { .. }
        | AppAction::PurchaseCredits
        | AppAction::UpgradeMembership
        | AppAction::SetMembership { .. }
        | AppAction::CycleMembership
        | AppAction::ToggleDeepResearch
        | AppAction::DismissAlert
        | AppAction::StartNewChat
        | AppAction::RemoveAttachment { .. }
        | AppAction::ScrollUp { .. }
        | AppAction::ScrollDown { .. }
        | AppAction::SetStatus { .. }
        | AppAction::ClearStatus
        | AppAction::OpenScreen { .. }
        | AppAction::RequestExit => chat::handle_chat_action(app, action),

        AppAction::QuizNextQuestion
        | AppAction::QuizPreviousQuestion
        | AppAction::QuizCycleAnswer { .. }
        | AppAction::QuizToggleNoPreference
        | AppAction::QuizSave
        | AppAction::QuizPress { .. }
        | AppAction::QuizDrag { .. }
        | AppAction::QuizRelease
        | AppAction::QuizNudge { .. } => quiz::handle_quiz_action(app, action),

        AppAction::HistoryMoveUp
        | AppAction::HistoryMoveDown
        | AppAction::HistoryTypeChar { .. }
        | AppAction::HistoryBackspace
        | AppAction::HistoryRequestDelete
        | AppAction::HistoryRequestDeleteAll
        | AppAction::HistoryConfirm
        | AppAction::HistoryCancel
        | AppAction::HistoryNewChat => history::handle_history_action(app, action),

        AppAction::SettingsTogglePersonalization
        | AppAction::SettingsRequestExport
        | AppAction::SettingsConfirmExport
        | AppAction::SettingsCancelExport => settings::handle_settings_action(app, action),
    }
}
