use std::fmt;

use crate::core::smart_match::MatchCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    pub fn as_str(self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Assistant => "assistant",
        }
    }
}

/// Opaque image handle supplied by the camera or the photo library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub String);

/// Opaque document reference supplied by the file picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef(pub String);

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub author: Author,
    pub text: String,
    pub images: Option<Vec<ImageHandle>>,
    pub documents: Option<Vec<DocumentRef>>,
    pub smart_match: Option<MatchCard>,
    /// Transient "thinking" entry awaiting replacement.
    pub placeholder: bool,
}

pub const THINKING_TEXT: &str = "AliveGPT is thinking...";
pub const DEEP_RESEARCH_TEXT: &str = "AliveGPT is conducting Deep Research.....";

impl ChatMessage {
    pub fn user(
        id: MessageId,
        text: impl Into<String>,
        images: Vec<ImageHandle>,
        documents: Vec<DocumentRef>,
    ) -> Self {
        Self {
            id,
            author: Author::User,
            text: text.into(),
            images: (!images.is_empty()).then_some(images),
            documents: (!documents.is_empty()).then_some(documents),
            smart_match: None,
            placeholder: false,
        }
    }

    pub fn assistant(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            author: Author::Assistant,
            text: text.into(),
            images: None,
            documents: None,
            smart_match: None,
            placeholder: false,
        }
    }

    pub fn assistant_card(id: MessageId, card: MatchCard) -> Self {
        Self {
            smart_match: Some(card),
            ..Self::assistant(id, String::new())
        }
    }

    pub fn thinking(id: MessageId, deep_research: bool) -> Self {
        let text = if deep_research {
            DEEP_RESEARCH_TEXT
        } else {
            THINKING_TEXT
        };
        Self {
            placeholder: true,
            ..Self::assistant(id, text)
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn is_assistant(&self) -> bool {
        self.author == Author::Assistant
    }

    pub fn attachment_count(&self) -> usize {
        self.images.as_ref().map_or(0, Vec::len) + self.documents.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_omits_empty_attachment_lists() {
        let msg = ChatMessage::user(MessageId(1), "hi", Vec::new(), Vec::new());
        assert!(msg.is_user());
        assert!(msg.images.is_none());
        assert!(msg.documents.is_none());
        assert_eq!(msg.attachment_count(), 0);
    }

    #[test]
    fn user_message_keeps_attachments() {
        let msg = ChatMessage::user(
            MessageId(2),
            "",
            vec![ImageHandle("cam-1".into()), ImageHandle("lib-1".into())],
            vec![DocumentRef("notes.pdf".into())],
        );
        assert_eq!(msg.attachment_count(), 3);
        assert_eq!(msg.text, "");
    }

    #[test]
    fn thinking_text_depends_on_research_mode() {
        assert_eq!(ChatMessage::thinking(MessageId(3), false).text, THINKING_TEXT);
        let deep = ChatMessage::thinking(MessageId(4), true);
        assert_eq!(deep.text, DEEP_RESEARCH_TEXT);
        assert!(deep.placeholder);
        assert!(deep.is_assistant());
    }

    #[test]
    fn message_ids_display_with_prefix() {
        assert_eq!(MessageId(12).to_string(), "msg-12");
    }
}
