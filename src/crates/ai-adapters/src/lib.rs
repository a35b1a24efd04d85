//! Chat-completions protocol adapter
//!
//! Everything that touches the wire lives here: startup configuration,
//! the error taxonomy, request/response shapes, the HTTP transport, and
//! the SSE delta pump. The session layer above consumes this crate only
//! through [`ChatTransport`] and the delta channel.

pub mod client;
pub mod config;
pub mod error;
pub mod stream;
pub mod types;

pub use client::{ChatClient, ChatTransport, DeltaReceiver};
pub use config::ChatApiConfig;
pub use error::ChatApiError;
pub use stream::{pump_delta_stream, spawn_response_pump, DeltaResult};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, StreamChunk};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
