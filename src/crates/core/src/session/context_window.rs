//! Context windowing.
//!
//! Bounds the history sent to the model so long conversations stay
//! affordable and on-topic. Pure over its input; the stored session list
//! is never touched.

use log::debug;
use moodmate_core_types::{ChatMessage, ChatRole};

/// Rounds of conversation retained in an outgoing request.
pub const MAX_ROUNDS: usize = 10;
/// A round is one user plus one assistant message.
const MAX_WINDOW_MESSAGES: usize = MAX_ROUNDS * 2;

/// The bounded request history plus its phase classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    /// True iff the filtered history is exactly one user message.
    pub is_initial: bool,
    /// The most recent messages, order preserved.
    pub messages: Vec<ChatMessage>,
}

/// Select the bounded suffix of `history` to send.
///
/// Non-conversation roles are filtered out first; if more than
/// `2 * MAX_ROUNDS` messages remain, only the most recent ones are kept.
/// Idempotent for any input.
pub fn select_window(history: &[ChatMessage]) -> ContextWindow {
    let filtered: Vec<ChatMessage> = history
        .iter()
        .filter(|message| matches!(message.role, ChatRole::User | ChatRole::Assistant))
        .cloned()
        .collect();

    let is_initial = filtered.len() == 1 && filtered[0].role == ChatRole::User;

    let messages = if filtered.len() > MAX_WINDOW_MESSAGES {
        debug!(
            "context window: keeping the last {} of {} messages ({} rounds)",
            MAX_WINDOW_MESSAGES,
            filtered.len(),
            MAX_ROUNDS
        );
        filtered[filtered.len() - MAX_WINDOW_MESSAGES..].to_vec()
    } else {
        filtered
    };

    ContextWindow {
        is_initial,
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(i: usize) -> [ChatMessage; 2] {
        [
            ChatMessage::user(format!("u{}", i)),
            ChatMessage::assistant(format!("a{}", i)),
        ]
    }

    #[test]
    fn one_user_message_classifies_as_initial() {
        let window = select_window(&[ChatMessage::user("我迟到了")]);
        assert!(window.is_initial);
        assert_eq!(window.messages.len(), 1);
    }

    #[test]
    fn anything_else_classifies_as_continuation() {
        assert!(!select_window(&[]).is_initial);
        assert!(!select_window(&[ChatMessage::assistant("advice")]).is_initial);
        assert!(
            !select_window(&[ChatMessage::user("u"), ChatMessage::assistant("a")]).is_initial
        );
    }

    #[test]
    fn system_entries_are_filtered_before_classification() {
        let window = select_window(&[ChatMessage::system("persona"), ChatMessage::user("hi")]);
        assert!(window.is_initial);
        assert_eq!(window.messages.len(), 1);
        assert_eq!(window.messages[0].role, ChatRole::User);
    }

    #[test]
    fn short_history_passes_through_unchanged() {
        let history: Vec<ChatMessage> = (0..10).flat_map(round).collect();
        let window = select_window(&history);
        assert_eq!(window.messages, history);
    }

    #[test]
    fn long_history_keeps_the_last_twenty_in_order() {
        let mut history: Vec<ChatMessage> = (0..12).flat_map(round).collect();
        history.push(ChatMessage::user("latest"));
        assert_eq!(history.len(), 25);

        let window = select_window(&history);
        assert_eq!(window.messages.len(), 20);
        assert_eq!(window.messages, history[5..].to_vec());
        assert_eq!(window.messages.last().unwrap().content, "latest");
    }

    #[test]
    fn windowing_is_idempotent() {
        let history: Vec<ChatMessage> = (0..13).flat_map(round).collect();
        let once = select_window(&history);
        let twice = select_window(&once.messages);
        assert_eq!(once.messages, twice.messages);
    }
}
