use tracing::debug;

use crate::core::config::Config;
use crate::core::history::ChatHistory;
use crate::core::membership::Membership;
use crate::core::preferences::Preferences;
use crate::core::random::RandomSource;
use crate::core::session::{ChatSession, SubmitOutcome, SubmitRejection};
use crate::core::settings::Settings;

pub mod actions;
pub mod ui_state;

pub use actions::{
    apply_action, apply_actions, AppAction, AppActionContext, AppActionDispatcher,
    AppActionEnvelope, AppCommand,
};
pub use ui_state::{HandlePulse, Screen, UiState};

/// Everything the terminal front-end shows, owned by the event loop and
/// mutated only through [`apply_actions`].
pub struct App {
    pub session: ChatSession,
    pub preferences: Preferences,
    pub history: ChatHistory,
    pub settings: Settings,
    pub ui: UiState,
}

impl App {
    pub fn new(config: &Config, rng: Box<dyn RandomSource>) -> Self {
        let session = ChatSession::new(config.session_limits(), config.membership(), rng);
        Self::with_session(session)
    }

    pub fn with_session(session: ChatSession) -> Self {
        Self {
            session,
            preferences: Preferences::new(),
            history: ChatHistory::default(),
            settings: Settings::default(),
            ui: UiState::default(),
        }
    }

    /// Switches screens. The quiz is refused below the tier that unlocks
    /// preferences.
    pub fn open_screen(&mut self, screen: Screen) -> bool {
        if screen == Screen::Quiz && !self.session.membership().preferences_enabled() {
            self.ui.set_status("Upgrade to AliveGPT Plus to set matching preferences");
            return false;
        }
        debug!(screen = screen.title(), "screen opened");
        self.ui.screen = screen;
        self.ui.drag_handle = None;
        true
    }

    /// Changes tier, leaving the quiz if the new tier no longer unlocks it.
    pub fn set_membership(&mut self, tier: Membership) {
        self.session.set_membership(tier);
        if self.ui.screen == Screen::Quiz && !tier.preferences_enabled() {
            self.ui.screen = Screen::Chat;
        }
    }

    /// Turns a submit result into the timer command, surfacing quiet
    /// rejections in the status line.
    pub fn schedule(&mut self, outcome: SubmitOutcome) -> Option<AppCommand> {
        match outcome {
            SubmitOutcome::Scheduled(turn) => {
                self.ui.scroll_to_bottom();
                Some(AppCommand::ScheduleTurn(turn))
            }
            SubmitOutcome::Rejected(SubmitRejection::TurnInFlight) => {
                self.ui.set_status("AliveGPT is still replying");
                None
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => None,
        }
    }

    /// Tears the session down so any timer still running lands nowhere.
    pub fn request_exit(&mut self) {
        self.session.teardown();
        self.ui.exit_requested = true;
    }
}
