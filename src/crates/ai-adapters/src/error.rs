//! Chat API error taxonomy.

use thiserror::Error;

/// Failures raised by the chat API adapter.
///
/// A single malformed streaming event is not represented here: the delta
/// pump logs and skips it without aborting the stream.
#[derive(Debug, Error)]
pub enum ChatApiError {
    /// No credential configured. Detected at startup, never retried.
    #[error("chat API key is not configured (set MOODMATE_API_KEY)")]
    MissingApiKey,

    /// Non-success HTTP status; carries status text and the response body.
    #[error("chat API error: {status} - {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body does not match the expected shape.
    #[error("chat API response missing {0}")]
    MalformedResponse(&'static str),

    /// Request-level failure from the HTTP client.
    #[error("chat API request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The SSE stream failed mid-read.
    #[error("chat stream failed: {0}")]
    Stream(String),
}
