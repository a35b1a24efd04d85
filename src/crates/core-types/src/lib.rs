//! Shared low-level product DTOs
//!
//! Chat wire-level message shapes and mood domain types used across
//! the adapter, core, and app crates.

pub mod chat;
pub mod mood;

pub use chat::{ChatMessage, ChatRole};
pub use mood::{Category, InitialContext, Mood, MoodLog};
