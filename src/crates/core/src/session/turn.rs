//! Turn identity and content.

use moodmate_core_types::{ChatMessage, ChatRole};
use uuid::Uuid;

/// Opaque turn identifier, unique within a session and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnId(Uuid);

impl TurnId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Stored turns are user or assistant only; system instructions are
/// synthesized per request and never enter the session list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

/// One message of the conversation.
///
/// User content is fixed at creation. Assistant content starts empty and
/// grows by delta concatenation until the reply completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub id: TurnId,
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            id: TurnId::fresh(),
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    /// Empty assistant turn awaiting its streamed reply.
    pub fn assistant_placeholder() -> Self {
        Self::assistant(String::new())
    }

    /// Append-only content growth; deltas are never reordered or dropped
    /// once received.
    pub(crate) fn push_delta(&mut self, delta: &str) {
        self.content.push_str(delta);
    }

    pub fn to_chat_message(&self) -> ChatMessage {
        let role = match self.role {
            TurnRole::User => ChatRole::User,
            TurnRole::Assistant => ChatRole::Assistant,
        };
        ChatMessage {
            role,
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        let a = Turn::user("a");
        let b = Turn::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn deltas_concatenate_in_order() {
        let mut turn = Turn::assistant_placeholder();
        turn.push_delta("别");
        turn.push_delta("担心");
        assert_eq!(turn.content, "别担心");
    }
}
