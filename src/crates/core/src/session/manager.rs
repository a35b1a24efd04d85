//! Streaming chat session manager.
//!
//! Single writer over the turn list: every mutation goes through the
//! manager's lock, and the lock is held only across state transitions,
//! never across network I/O.

use crate::prompts::system_prompt;
use crate::session::context_window::select_window;
use crate::session::turn::{Turn, TurnId, TurnRole};
use log::{error, warn};
use moodmate_ai_adapters::{ChatApiError, ChatTransport};
use moodmate_core_types::{ChatMessage, InitialContext};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Fixed reply appended when a chat turn fails; the conversation always
/// stays renderable.
pub const FALLBACK_ASSISTANT_REPLY: &str = "抱歉，发生了错误。请稍后再试。";

type ResponseCallback = Box<dyn Fn() + Send + Sync>;
type DeltaListener = Box<dyn Fn(&str) + Send + Sync>;

/// Ordered turn list plus the in-flight flag.
#[derive(Debug, Default)]
struct ChatSession {
    turns: Vec<Turn>,
    loading: bool,
}

impl ChatSession {
    /// Insert the placeholder only if its id is not already present.
    fn ensure_turn(&mut self, turn: Turn) {
        if !self.turns.iter().any(|existing| existing.id == turn.id) {
            self.turns.push(turn);
        }
    }

    /// Deltas are matched to their turn by id, not by position, so
    /// interleaved updates cannot corrupt a different turn.
    fn apply_delta(&mut self, id: TurnId, delta: &str) {
        match self.turns.iter_mut().find(|turn| turn.id == id) {
            Some(turn) => turn.push_delta(delta),
            None => warn!("dropping delta for unknown turn id"),
        }
    }

    fn history(&self) -> Vec<ChatMessage> {
        self.turns.iter().map(Turn::to_chat_message).collect()
    }
}

/// Owns one conversation: appends user turns, streams the assistant reply
/// into a placeholder turn, and keeps the ordering and identity
/// invariants across updates.
pub struct ChatSessionManager {
    transport: Arc<dyn ChatTransport>,
    context: Option<InitialContext>,
    state: Mutex<ChatSession>,
    on_response: Option<ResponseCallback>,
    on_delta: Option<DeltaListener>,
}

impl ChatSessionManager {
    pub fn new(transport: Arc<dyn ChatTransport>, context: Option<InitialContext>) -> Self {
        Self {
            transport,
            context,
            state: Mutex::new(ChatSession::default()),
            on_response: None,
            on_delta: None,
        }
    }

    /// Invoked once per successful exchange, after the reply completes.
    pub fn with_response_callback(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_response = Some(Box::new(callback));
        self
    }

    /// Invoked after each delta is applied; the rendering hook for UIs
    /// that paint the reply as it streams.
    pub fn with_delta_listener(mut self, listener: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_delta = Some(Box::new(listener));
        self
    }

    fn lock(&self) -> MutexGuard<'_, ChatSession> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the stored turn list, in conversation order.
    pub fn messages(&self) -> Vec<Turn> {
        self.lock().turns.clone()
    }

    /// True exactly while a request is in flight with no terminal event.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Replace the whole turn list. Used to seed a session with the
    /// wizard's non-streaming advice before any chat turn exists.
    pub fn set_messages(&self, turns: Vec<Turn>) {
        self.lock().turns = turns;
    }

    /// Push a turn and stream the assistant's reply into the session.
    ///
    /// The turn is stored and `loading` raised before the first await.
    /// Failures never propagate: any error during the exchange becomes a
    /// single fixed apology turn, and `loading` always clears.
    pub async fn append(&self, role: TurnRole, content: impl Into<String>) {
        let history = {
            let mut session = self.lock();
            if session.loading {
                warn!("append while a reply is still streaming; callers should wait for loading to clear");
            }
            session.turns.push(Turn::new(role, content.into()));
            session.loading = true;
            session.history()
        };

        if let Err(e) = self.run_exchange(&history).await {
            error!("chat exchange failed: {}", e);
            self.lock().turns.push(Turn::assistant(FALLBACK_ASSISTANT_REPLY));
        }

        self.lock().loading = false;
    }

    async fn run_exchange(&self, history: &[ChatMessage]) -> Result<(), ChatApiError> {
        let window = select_window(history);
        let category = self.context.as_ref().map(|context| context.category);
        let prompt = system_prompt(category, window.is_initial);

        let mut rx = self.transport.stream_chat(&prompt, &window.messages).await?;

        // Exactly one placeholder per append call.
        let reply_id = {
            let mut session = self.lock();
            let placeholder = Turn::assistant_placeholder();
            let id = placeholder.id;
            session.ensure_turn(placeholder);
            id
        };

        while let Some(delta) = rx.recv().await {
            let delta = delta?;
            self.lock().apply_delta(reply_id, &delta);
            if let Some(listener) = &self.on_delta {
                listener(&delta);
            }
        }

        if let Some(callback) = &self.on_response {
            callback();
        }
        Ok(())
    }
}
