//! Conversation message history management.

use crate::types::Message;

/// Ordered transcript of a single conversation.
///
/// Index 0 holds the system prompt when one was set through
/// [`Conversation::upsert_system`]; every other turn is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message unconditionally.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace the leading system prompt, or insert one at index 0.
    pub fn upsert_system(&mut self, content: impl Into<String>) {
        if self.messages.first().is_some_and(Message::is_system) {
            self.messages[0].content = content.into();
        } else {
            self.messages.insert(0, Message::system(content));
        }
    }

    /// The system prompt, if index 0 holds one.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.is_system())
            .map(|m| m.content.as_str())
    }

    /// Get all messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Clear all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
