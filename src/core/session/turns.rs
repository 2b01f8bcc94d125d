use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{Alert, ChatSession, PendingTurn};
use crate::core::constants::{
    CHAT_EXHAUSTED_CUTOFF, CHAT_FAILURE_CUTOFF, MATCH_COST, MATCH_EXHAUSTED_CUTOFF,
    MATCH_FAILURE_CUTOFF, REPLY_COST, SEND_COST,
};
use crate::core::message::ChatMessage;
use crate::core::responses::{reply_for, transient_failure_message, ResponseCategory};
use crate::core::smart_match::{self, MatchKind};

/// A turn appends the user message and then the placeholder that the reply
/// replaces, so a send needs room for both.
const MESSAGES_PER_TURN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnMode {
    Chat,
    DeepResearch,
    SmartMatch(MatchKind),
}

impl TurnMode {
    fn cutoffs(self) -> (f64, f64) {
        match self {
            TurnMode::Chat | TurnMode::DeepResearch => {
                (CHAT_FAILURE_CUTOFF, CHAT_EXHAUSTED_CUTOFF)
            }
            TurnMode::SmartMatch(_) => (MATCH_FAILURE_CUTOFF, MATCH_EXHAUSTED_CUTOFF),
        }
    }
}

/// Handed to whoever runs the timer. Resolve with `turn_id` once `delay` has
/// elapsed, unless `cancel_token` fires first.
#[derive(Debug, Clone)]
pub struct ScheduledTurn {
    pub turn_id: u64,
    pub delay: Duration,
    pub cancel_token: CancellationToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The transcript is full; the chat-limit alert is raised.
    RateLimited,
    /// Balance is zero or below; the credit-exhausted alert is raised.
    CreditExhausted,
    /// A previous turn has not resolved yet. Nothing changes.
    TurnInFlight,
    TornDown,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Empty input and no attachments.
    Ignored,
    Rejected(SubmitRejection),
    Scheduled(ScheduledTurn),
}

impl SubmitOutcome {
    pub fn scheduled(self) -> Option<ScheduledTurn> {
        match self {
            SubmitOutcome::Scheduled(turn) => Some(turn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Replied { category: ResponseCategory },
    Matched { kind: MatchKind },
    /// Injected transient failure; the message is in the error alert.
    Failed { message: &'static str },
    CreditExhausted,
    /// Unknown, superseded or post-teardown turn id. Nothing changed.
    Stale,
}

impl ChatSession {
    /// Sends the input buffer plus the attachment tray.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.torn_down {
            return SubmitOutcome::Rejected(SubmitRejection::TornDown);
        }
        let text = self.input.trim().to_string();
        if text.is_empty() && self.attachments.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let mode = if self.deep_research && self.membership.deep_research_enabled() {
            TurnMode::DeepResearch
        } else {
            TurnMode::Chat
        };
        self.begin_turn(text, mode)
    }

    /// Replaces the input buffer with `text` and submits it.
    pub fn submit_text(&mut self, text: impl Into<String>) -> SubmitOutcome {
        if self.torn_down {
            return SubmitOutcome::Rejected(SubmitRejection::TornDown);
        }
        self.input = text.into();
        self.submit()
    }

    /// Sends the canned request for `kind`; the reply is a match card.
    pub fn request_smart_match(&mut self, kind: MatchKind) -> SubmitOutcome {
        if self.torn_down {
            return SubmitOutcome::Rejected(SubmitRejection::TornDown);
        }
        self.begin_turn(kind.request_text().to_string(), TurnMode::SmartMatch(kind))
    }

    fn begin_turn(&mut self, text: String, mode: TurnMode) -> SubmitOutcome {
        if self.messages.len() + MESSAGES_PER_TURN > self.limits.chat_limit {
            info!(messages = self.messages.len(), "chat limit reached");
            self.raise(Alert::ChatLimitReached);
            return SubmitOutcome::Rejected(SubmitRejection::RateLimited);
        }
        if self.credits <= 0 {
            info!(credits = self.credits, "send refused, no credits");
            self.raise(Alert::CreditExhausted);
            return SubmitOutcome::Rejected(SubmitRejection::CreditExhausted);
        }
        if self.pending.is_some() {
            debug!("send refused, turn in flight");
            return SubmitOutcome::Rejected(SubmitRejection::TurnInFlight);
        }

        let (images, documents) = self.attachments.take_all();
        let user_id = self.allocate_id();
        self.messages.push(ChatMessage::user(user_id, text.clone(), images, documents));
        self.deduct(SEND_COST);
        self.input.clear();

        let placeholder = self.allocate_id();
        self.messages.push(ChatMessage::thinking(
            placeholder,
            mode == TurnMode::DeepResearch,
        ));

        let delay = self.draw_delay();
        let cancel_token = self.start_new_turn();
        self.pending = Some(PendingTurn {
            turn_id: self.current_turn_id,
            placeholder,
            prompt: text,
            mode,
        });
        debug!(
            turn_id = self.current_turn_id,
            ?mode,
            delay_ms = delay.as_millis() as u64,
            credits = self.credits,
            "turn scheduled"
        );

        SubmitOutcome::Scheduled(ScheduledTurn {
            turn_id: self.current_turn_id,
            delay,
            cancel_token,
        })
    }

    /// Lands the reply for `turn_id`. Ids other than the pending turn's are
    /// ignored, as is everything after teardown.
    pub fn resolve_turn(&mut self, turn_id: u64) -> TurnOutcome {
        if self.torn_down {
            debug!(turn_id, "ignoring turn after teardown");
            return TurnOutcome::Stale;
        }
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.turn_id == turn_id);
        if !is_current {
            debug!(turn_id, "ignoring stale turn");
            return TurnOutcome::Stale;
        }
        let Some(pending) = self.pending.take() else {
            return TurnOutcome::Stale;
        };
        self.turn_cancel_token = None;

        let (failure_cutoff, exhausted_cutoff) = pending.mode.cutoffs();
        let roll = self.rng.unit();

        if roll < failure_cutoff {
            self.remove_message(pending.placeholder);
            let message = transient_failure_message(self.rng.as_mut());
            info!(turn_id, error = message, "turn failed");
            self.raise(Alert::Error {
                message: message.to_string(),
            });
            return TurnOutcome::Failed { message };
        }
        if roll < exhausted_cutoff {
            self.remove_message(pending.placeholder);
            info!(turn_id, "turn hit credit exhaustion");
            self.raise(Alert::CreditExhausted);
            return TurnOutcome::CreditExhausted;
        }

        let (reply, outcome, cost) = match pending.mode {
            TurnMode::Chat | TurnMode::DeepResearch => {
                let (category, text) = reply_for(&pending.prompt, self.rng.as_mut());
                (
                    ChatMessage::assistant(pending.placeholder, text),
                    TurnOutcome::Replied { category },
                    REPLY_COST,
                )
            }
            TurnMode::SmartMatch(kind) => {
                let card = smart_match::generate(kind, self.rng.as_mut());
                (
                    ChatMessage::assistant_card(pending.placeholder, card),
                    TurnOutcome::Matched { kind },
                    MATCH_COST,
                )
            }
        };

        match self.messages.iter_mut().find(|m| m.id == pending.placeholder) {
            Some(slot) => *slot = reply,
            None => {
                debug!(turn_id, "placeholder vanished, dropping reply");
                return TurnOutcome::Stale;
            }
        }
        self.deduct(cost);
        debug!(turn_id, credits = self.credits, "turn resolved");
        outcome
    }

    fn draw_delay(&mut self) -> Duration {
        let min = self.limits.min_delay;
        let max = self.limits.max_delay;
        if max <= min {
            return min;
        }
        min + (max - min).mul_f64(self.rng.unit())
    }

    fn start_new_turn(&mut self) -> CancellationToken {
        if let Some(token) = self.turn_cancel_token.take() {
            token.cancel();
        }
        self.current_turn_id += 1;
        let token = CancellationToken::new();
        self.turn_cancel_token = Some(token.clone());
        token
    }
}
