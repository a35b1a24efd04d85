//! Chat session layer
//!
//! Turn identity, context windowing, and the streaming session manager.

pub mod context_window;
pub mod manager;
pub mod turn;

pub use context_window::{select_window, ContextWindow, MAX_ROUNDS};
pub use manager::{ChatSessionManager, FALLBACK_ASSISTANT_REPLY};
pub use turn::{Turn, TurnId, TurnRole};
