//! Chat transcript store
//!
//! Plain in-memory message list, bounded to keep the markdown render and
//! auto-scroll cheap over a long session. Nothing here persists.

use fluent_ui::{ChatMessage, Sender};

/// Maximum retained messages before the oldest are dropped
const MAX_MESSAGES: usize = 500;

/// Ordered chat transcript for one session
#[derive(Default)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, dropping the oldest once over capacity
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(sender, text));
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut history = ChatHistory::new();
        history.push(Sender::User, "hello");
        history.push(Sender::Tutor, "Hello! How are you today?");

        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].sender, Sender::User);
        assert_eq!(history.messages()[1].sender, Sender::Tutor);
    }

    #[test]
    fn test_bounded_capacity() {
        let mut history = ChatHistory::new();
        for i in 0..(MAX_MESSAGES + 10) {
            history.push(Sender::User, format!("message {i}"));
        }

        assert_eq!(history.len(), MAX_MESSAGES);
        // Oldest messages were dropped
        assert_eq!(history.messages()[0].text, "message 10");
    }

    #[test]
    fn test_clear() {
        let mut history = ChatHistory::new();
        history.push(Sender::User, "hello");
        history.clear();
        assert!(history.is_empty());
    }
}
