//! Saved-chat list with search and confirmed deletion.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::constants::MAX_SAVED_CHATS;

pub const MAX_CHATS_NOTICE: &str = "Delete a chat before creating a new one...";
pub const MAX_CHATS_HINT: &str = "upgrade to be able to start more chats";

const SEED_TITLE: &str = "Summary or title of past chat";
const SEED_DESCRIPTION: &str = "Brief description of past chat, or main context";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Confirmation dialog currently open over the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPrompt {
    DeleteChat { id: u64 },
    DeleteAll,
    MaxChats,
}

#[derive(Debug, Clone)]
pub struct ChatHistory {
    entries: Vec<ChatSummary>,
    query: String,
    prompt: Option<HistoryPrompt>,
    next_id: u64,
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::seeded(Utc::now())
    }
}

impl ChatHistory {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            query: String::new(),
            prompt: None,
            next_id: 0,
        }
    }

    /// A full list of placeholder entries, all created at `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut history = Self::empty();
        for _ in 0..MAX_SAVED_CHATS {
            history.push(SEED_TITLE, SEED_DESCRIPTION, now);
        }
        history
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ChatSummary {
            id,
            title: title.into(),
            description: description.into(),
            created_at,
        });
        id
    }

    pub fn entries(&self) -> &[ChatSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_SAVED_CHATS
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
    }

    /// Entries whose title or description contain the query, ignoring case.
    pub fn search(&self) -> Vec<&ChatSummary> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn prompt(&self) -> Option<HistoryPrompt> {
        self.prompt
    }

    /// Opens the delete confirmation for `id`, if it exists.
    pub fn request_delete(&mut self, id: u64) -> bool {
        if !self.entries.iter().any(|entry| entry.id == id) {
            return false;
        }
        self.prompt = Some(HistoryPrompt::DeleteChat { id });
        true
    }

    pub fn request_delete_all(&mut self) {
        self.prompt = Some(HistoryPrompt::DeleteAll);
    }

    /// Checks room for another chat. When the list is full the max-chats
    /// notice opens instead and this returns `false`.
    pub fn request_new_chat(&mut self) -> bool {
        if self.is_full() {
            debug!(saved = self.entries.len(), "new chat refused, history full");
            self.prompt = Some(HistoryPrompt::MaxChats);
            return false;
        }
        true
    }

    /// Carries out the open prompt. Returns how many entries were removed.
    pub fn confirm(&mut self) -> usize {
        let removed = match self.prompt.take() {
            Some(HistoryPrompt::DeleteChat { id }) => {
                let before = self.entries.len();
                self.entries.retain(|entry| entry.id != id);
                before - self.entries.len()
            }
            Some(HistoryPrompt::DeleteAll) => {
                let count = self.entries.len();
                self.entries.clear();
                count
            }
            Some(HistoryPrompt::MaxChats) | None => 0,
        };
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "history entries deleted");
        }
        removed
    }

    pub fn cancel(&mut self) {
        self.prompt = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 15, 9, 30, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn seeded_history_is_full() {
        let history = ChatHistory::seeded(now());
        assert_eq!(history.len(), MAX_SAVED_CHATS);
        assert!(history.is_full());
        assert!(history.entries().iter().all(|e| e.created_at == now()));
    }

    #[test]
    fn new_chat_refused_when_full() {
        let mut history = ChatHistory::seeded(now());
        assert!(!history.request_new_chat());
        assert_eq!(history.prompt(), Some(HistoryPrompt::MaxChats));
        assert_eq!(history.confirm(), 0);
        assert_eq!(history.len(), MAX_SAVED_CHATS);

        let mut roomy = ChatHistory::empty();
        assert!(roomy.request_new_chat());
        assert_eq!(roomy.prompt(), None);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut history = ChatHistory::seeded(now());
        let id = history.entries()[1].id;

        assert!(history.request_delete(id));
        history.cancel();
        assert_eq!(history.len(), 4);

        assert!(history.request_delete(id));
        assert_eq!(history.confirm(), 1);
        assert_eq!(history.len(), 3);
        assert!(history.entries().iter().all(|e| e.id != id));
        assert!(history.request_new_chat());
    }

    #[test]
    fn delete_unknown_id_opens_nothing() {
        let mut history = ChatHistory::seeded(now());
        assert!(!history.request_delete(99));
        assert_eq!(history.prompt(), None);
    }

    #[test]
    fn delete_all_empties_list() {
        let mut history = ChatHistory::seeded(now());
        history.request_delete_all();
        assert_eq!(history.confirm(), 4);
        assert!(history.is_empty());
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let mut history = ChatHistory::empty();
        history.push("Sleep routine", "Wind-down ideas", now());
        history.push("Workout plan", "Three days a week", now());
        history.push("Groceries", "Better SLEEP snacks", now());

        history.set_query("sleep");
        let titles: Vec<_> = history.search().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Sleep routine", "Groceries"]);

        history.set_query("  ");
        assert_eq!(history.search().len(), 3);

        history.set_query("yoga");
        assert!(history.search().is_empty());
    }
}
