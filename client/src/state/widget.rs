#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use super::{ChatMessage, Sender};

/// State for the local rule-based chat widget.
///
/// Starts closed with a greeting already in the transcript. Replies come
/// from `sitelogic::responder` synchronously — no network, no context
/// across turns.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage {
                text: sitelogic::responder::reply("salom").to_owned(),
                sender: Sender::Bot,
            }],
        }
    }
}

impl WidgetState {
    /// Flip the open/closed state. Visibility mirrors this boolean exactly.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Append the user's message and the responder's canned reply.
    pub fn submit(&mut self, text: impl Into<String>) {
        let text = text.into();
        let reply = sitelogic::responder::reply(&text);
        self.messages.push(ChatMessage {
            text,
            sender: Sender::User,
        });
        self.messages.push(ChatMessage {
            text: reply.to_owned(),
            sender: Sender::Bot,
        });
    }
}
