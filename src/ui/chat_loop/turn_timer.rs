use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::app::{AppAction, AppActionContext, AppActionDispatcher};
use crate::core::session::ScheduledTurn;

/// Waits out the simulated thinking delay, then queues the resolution. A
/// cancelled turn dispatches nothing.
pub fn spawn_turn_timer(
    dispatcher: AppActionDispatcher,
    turn: ScheduledTurn,
    ctx: AppActionContext,
) -> JoinHandle<()> {
    let ScheduledTurn {
        turn_id,
        delay,
        cancel_token,
    } = turn;
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                debug!(turn_id, "turn timer cancelled");
            }
            _ = tokio::time::sleep(delay) => {
                dispatcher.dispatch_many([AppAction::TurnTimerElapsed { turn_id }], ctx);
            }
        }
    })
}
