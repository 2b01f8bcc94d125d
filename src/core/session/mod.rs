//! Credit-metered chat session.
//!
//! [`ChatSession`] owns the transcript, the credit balance, the single alert
//! slot and the attachment tray. Sending a message schedules a turn: the
//! caller receives a [`ScheduledTurn`] carrying a delay and a cancellation
//! token, waits, and then calls [`ChatSession::resolve_turn`] with the turn id.
//! Every random branch goes through the injected [`RandomSource`].

mod alerts;
mod attachments;
mod turns;


use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::config::defaults::{
    DEFAULT_ATTACHMENT_CAP, DEFAULT_CHAT_LIMIT, DEFAULT_LOW_CREDIT_PROBABILITY,
    DEFAULT_LOW_CREDIT_THRESHOLD, DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS,
    DEFAULT_PURCHASE_CREDITS, DEFAULT_STARTING_CREDITS,
};
use crate::core::membership::Membership;
use crate::core::message::{ChatMessage, DocumentRef, ImageHandle, MessageId};
use crate::core::random::RandomSource;

pub use alerts::Alert;
pub use attachments::{AttachmentError, AttachmentSource, AttachmentTray};
pub use turns::{ScheduledTurn, SubmitOutcome, SubmitRejection, TurnMode, TurnOutcome};

/// Economy tunables for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLimits {
    pub starting_credits: i64,
    /// Maximum transcript length, placeholders included.
    pub chat_limit: usize,
    /// Per-source cap on pending attachments.
    pub attachment_cap: usize,
    pub purchase_credits: i64,
    /// Balances in `(0, low_credit_threshold]` may trigger the low-credit nudge.
    pub low_credit_threshold: i64,
    pub low_credit_probability: f64,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_STARTING_CREDITS,
            chat_limit: DEFAULT_CHAT_LIMIT,
            attachment_cap: DEFAULT_ATTACHMENT_CAP,
            purchase_credits: DEFAULT_PURCHASE_CREDITS,
            low_credit_threshold: DEFAULT_LOW_CREDIT_THRESHOLD,
            low_credit_probability: DEFAULT_LOW_CREDIT_PROBABILITY,
            min_delay: Duration::from_millis(DEFAULT_MIN_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
        }
    }
}

/// The turn that is waiting for its timer.
#[derive(Debug, Clone)]
struct PendingTurn {
    turn_id: u64,
    placeholder: MessageId,
    prompt: String,
    mode: TurnMode,
}

pub struct ChatSession {
    limits: SessionLimits,
    rng: Box<dyn RandomSource>,
    messages: Vec<ChatMessage>,
    credits: i64,
    alert: Option<Alert>,
    membership: Membership,
    deep_research: bool,
    input: String,
    attachments: AttachmentTray,
    pending: Option<PendingTurn>,
    turn_cancel_token: Option<CancellationToken>,
    current_turn_id: u64,
    next_message_id: u64,
    torn_down: bool,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("credits", &self.credits)
            .field("messages", &self.messages.len())
            .field("alert", &self.alert)
            .field("membership", &self.membership)
            .field("current_turn_id", &self.current_turn_id)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    pub fn new(limits: SessionLimits, membership: Membership, rng: Box<dyn RandomSource>) -> Self {
        debug!(
            credits = limits.starting_credits,
            chat_limit = limits.chat_limit,
            tier = membership.title(),
            "session created"
        );
        Self {
            credits: limits.starting_credits,
            attachments: AttachmentTray::new(limits.attachment_cap),
            limits,
            rng,
            messages: Vec::new(),
            alert: None,
            membership,
            deep_research: false,
            input: String::new(),
            pending: None,
            turn_cancel_token: None,
            current_turn_id: 0,
            next_message_id: 0,
            torn_down: false,
        }
    }

    pub fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    pub fn credits(&self) -> i64 {
        self.credits
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn membership(&self) -> Membership {
        self.membership
    }

    /// Whether the next send runs as deep research.
    pub fn deep_research(&self) -> bool {
        self.deep_research
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn attachments(&self) -> &AttachmentTray {
        &self.attachments
    }

    pub fn is_turn_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_turn_id(&self) -> u64 {
        self.current_turn_id
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_input(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn attach_camera_image(&mut self, image: ImageHandle) -> Result<(), AttachmentError> {
        self.attachments.add_camera_image(image)
    }

    pub fn attach_photo(&mut self, image: ImageHandle) -> Result<(), AttachmentError> {
        self.attachments.add_photo(image)
    }

    pub fn attach_document(&mut self, document: DocumentRef) -> Result<(), AttachmentError> {
        self.attachments.add_document(document)
    }

    /// Drops `index` from each attachment list that has it.
    pub fn remove_attachment(&mut self, index: usize) -> usize {
        self.attachments.remove_at(index)
    }

    /// Adds the purchase bundle and confirms it.
    pub fn purchase_credits(&mut self) {
        if self.torn_down {
            return;
        }
        self.credits += self.limits.purchase_credits;
        debug!(credits = self.credits, "credits purchased");
        self.raise(Alert::PurchaseSucceeded);
    }

    /// Dismisses any credit alert. The tier itself is changed separately.
    pub fn upgrade_membership(&mut self) {
        if self.alert.as_ref().is_some_and(Alert::shows_balance) {
            self.alert = None;
        }
    }

    pub fn set_membership(&mut self, membership: Membership) {
        self.membership = membership;
        if !membership.deep_research_enabled() {
            self.deep_research = false;
        }
        debug!(tier = membership.title(), "membership changed");
    }

    /// Flips deep research when the tier allows it. Returns whether it changed.
    pub fn toggle_deep_research(&mut self) -> bool {
        if !self.membership.deep_research_enabled() {
            return false;
        }
        self.deep_research = !self.deep_research;
        true
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Clears the transcript and any chat-limit alert, cancelling the turn in
    /// flight so its timer cannot land in the fresh chat.
    pub fn start_new_chat(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_turn();
        self.messages.clear();
        if self.alert == Some(Alert::ChatLimitReached) {
            self.alert = None;
        }
        debug!("new chat started");
    }

    /// Cancels the pending timer. Later resolutions are no-ops.
    pub fn teardown(&mut self) {
        self.cancel_turn();
        self.torn_down = true;
        debug!("session torn down");
    }

    fn raise(&mut self, alert: Alert) {
        debug!(?alert, "alert raised");
        self.alert = Some(alert);
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        id
    }

    /// Deducts `amount`, then maybe nudges when the balance is low but positive.
    fn deduct(&mut self, amount: i64) {
        self.credits -= amount;
        let low = self.credits > 0 && self.credits <= self.limits.low_credit_threshold;
        if low
            && self.alert != Some(Alert::LowCredits)
            && self.rng.unit() < self.limits.low_credit_probability
        {
            self.raise(Alert::LowCredits);
        }
    }

    fn cancel_turn(&mut self) {
        if let Some(token) = self.turn_cancel_token.take() {
            token.cancel();
        }
        if let Some(pending) = self.pending.take() {
            self.remove_message(pending.placeholder);
            debug!(turn_id = pending.turn_id, "turn cancelled");
        }
    }

    fn remove_message(&mut self, id: MessageId) -> bool {
        match self.messages.iter().position(|m| m.id == id) {
            Some(index) => {
                self.messages.remove(index);
                true
            }
            None => false,
        }
    }
}
