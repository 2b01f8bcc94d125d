use crate::core::app::{App, AppActionContext};
use crate::core::membership::Membership;
use crate::core::random::ScriptedRandom;
use crate::core::session::{ChatSession, SessionLimits};

/// App on the default economy whose random draws always land on a
/// successful, nudge-free turn.
pub fn create_test_app() -> App {
    create_scripted_app(Membership::Lite, [])
}

/// App whose random source replays `draws` before falling back.
pub fn create_scripted_app(membership: Membership, draws: impl IntoIterator<Item = f64>) -> App {
    let session = ChatSession::new(
        SessionLimits::default(),
        membership,
        Box::new(ScriptedRandom::new(draws)),
    );
    App::with_session(session)
}

pub fn default_ctx() -> AppActionContext {
    AppActionContext {
        term_width: 80,
        term_height: 24,
    }
}
