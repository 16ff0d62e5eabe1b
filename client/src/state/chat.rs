#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::{ChatMessage, Sender};

/// Bot bubble shown when the server reports failure without a usable reply.
/// Transport failures arrive as the `Err` text from the network layer.
pub const MSG_REQUEST_FAILED: &str = "Xatolik yuz berdi. So'rov bajarilmadi.";

/// State for the server-backed AI chat panel.
///
/// The transcript is append-only for the lifetime of the page view and the
/// typing indicator is a single boolean, so a second request starting
/// before the first resolves can never stack a duplicate indicator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
}

impl ChatState {
    /// Append the user's message and show the typing indicator.
    pub fn begin(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            text: text.into(),
            sender: Sender::User,
        });
        self.typing = true;
    }

    /// Resolve the in-flight request: hide the typing indicator and append
    /// the bot reply. Runs on every branch — a server-reported failure or a
    /// transport error still produces a clear failure bubble, never an
    /// empty one.
    pub fn settle(&mut self, reply: Result<String, String>) {
        self.typing = false;
        let text = match reply {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => MSG_REQUEST_FAILED.to_owned(),
            Err(text) => text,
        };
        self.messages.push(ChatMessage {
            text,
            sender: Sender::Bot,
        });
    }
}
