//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Each model is a plain struct with methods; `App` wraps
//! them in `RwSignal` contexts. The two chat surfaces (AI panel and local
//! widget) share one message type and one toast model.

pub mod chat;
pub mod overlay;
pub mod toast;
pub mod widget;

/// A single transcript entry, used by both chat surfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}
