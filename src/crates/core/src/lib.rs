// Moodmate Core Library - Platform-agnostic companion logic
// Layers: core-types DTOs -> ai-adapters transport -> session machine -> app

pub mod advice;
pub mod prompts;
pub mod session;
pub mod storage;

// Export main types
pub use advice::{advice_user_message, request_initial_advice};
pub use prompts::system_prompt;
pub use session::{
    select_window, ChatSessionManager, ContextWindow, Turn, TurnId, TurnRole,
    FALLBACK_ASSISTANT_REPLY, MAX_ROUNDS,
};
pub use storage::{MoodLogStore, StorageError};

// Re-export the transport surface the app wires together
pub use moodmate_ai_adapters::{ChatApiConfig, ChatApiError, ChatClient, ChatTransport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
