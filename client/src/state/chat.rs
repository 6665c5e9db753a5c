//! Floating assistant chat: visibility, input buffer, and message log.
//!
//! DESIGN
//! ======
//! The log is append-only and starts with one bot greeting. `send` records
//! the user's message synchronously and hands the text back so the widget can
//! request the reply; `receive_reply` appends whatever the assistant returns.
//! Replies are not coalesced, so two quick sends yield two bot answers.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

/// Opening message shown before the user types anything.
pub const GREETING: &str = "Hello! I'm Dr. Ajith's virtual assistant. How can I help you today?";

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: ChatSender,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: ChatSender::User }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: ChatSender::Bot }
    }

    /// User messages sit on the right, bot messages on the left.
    #[must_use]
    pub fn is_from_user(&self) -> bool {
        self.sender == ChatSender::User
    }
}

/// State for the floating chat widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub input: String,
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { open: false, input: String::new(), messages: vec![ChatMessage::bot(GREETING)] }
    }
}

impl ChatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Commit the current input as a user message.
    ///
    /// Returns the sent text, or `None` when the input is blank (in which case
    /// nothing changes, the input included).
    pub fn send(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        log::debug!("chat message sent, log length {}", self.messages.len());
        Some(text)
    }

    /// Append the assistant's answer.
    pub fn receive_reply(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::bot(text));
    }
}
