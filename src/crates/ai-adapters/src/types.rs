//! Wire types for the chat-completions endpoint.

use moodmate_core_types::ChatMessage;
use serde::{Deserialize, Serialize};

/// Sampling parameters are part of the product's conversational tone and
/// identical for the buffered and streaming calls, so the companion does
/// not shift voice mid-conversation.
pub const CHAT_TEMPERATURE: f32 = 1.1;
pub const CHAT_PRESENCE_PENALTY: f32 = 0.6;
pub const CHAT_FREQUENCY_PENALTY: f32 = 0.3;

/// Token budget for the wizard's one-shot advice reply.
pub const ADVICE_MAX_TOKENS: u32 = 500;
/// Token budget per streamed chat reply.
pub const STREAM_MAX_TOKENS: u32 = 200;

fn is_false(value: &bool) -> bool {
    !*value
}

/// POST body for `{base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub max_tokens: u32,
    /// Absent for the buffered call.
    #[serde(skip_serializing_if = "is_false")]
    pub stream: bool,
}

impl ChatCompletionRequest {
    /// Non-streaming request shape (the wizard's initial advice call).
    pub fn buffered(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: CHAT_TEMPERATURE,
            presence_penalty: CHAT_PRESENCE_PENALTY,
            frequency_penalty: CHAT_FREQUENCY_PENALTY,
            max_tokens: ADVICE_MAX_TOKENS,
            stream: false,
        }
    }

    /// Streaming request shape for chat turns.
    pub fn streaming(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            max_tokens: STREAM_MAX_TOKENS,
            stream: true,
            ..Self::buffered(model, messages)
        }
    }
}

/// Fully-buffered response of the non-streaming call.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if the body carries it.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// One decoded `data:` event of the streaming response.
#[derive(Debug, Deserialize)]
pub struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Debug, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

impl StreamChunk {
    /// `choices[0].delta.content` when present and non-empty.
    ///
    /// Keepalive chunks with empty choices or an empty delta yield `None`.
    pub fn into_delta(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmate_core_types::ChatMessage;

    #[test]
    fn buffered_request_omits_stream_flag() {
        let request = ChatCompletionRequest::buffered(
            "deepseek-chat",
            vec![ChatMessage::system("s"), ChatMessage::user("u")],
        );
        let json = serde_json::to_value(&request).expect("serializable request");
        assert!(json.get("stream").is_none());
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn streaming_request_keeps_identical_sampling() {
        let buffered = ChatCompletionRequest::buffered("m", vec![]);
        let streaming = ChatCompletionRequest::streaming("m", vec![]);
        assert_eq!(streaming.temperature, buffered.temperature);
        assert_eq!(streaming.presence_penalty, buffered.presence_penalty);
        assert_eq!(streaming.frequency_penalty, buffered.frequency_penalty);

        let json = serde_json::to_value(&streaming).expect("serializable request");
        assert_eq!(json["stream"], true);
        assert_eq!(json["max_tokens"], 200);
    }

    #[test]
    fn response_content_extracted_from_first_choice() {
        let raw = r#"{"choices":[{"message":{"content":"advice"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).expect("valid body");
        assert_eq!(response.into_content().as_deref(), Some("advice"));
    }

    #[test]
    fn response_without_choices_yields_none() {
        let raw = r#"{"choices":[]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).expect("valid body");
        assert!(response.into_content().is_none());
    }

    #[test]
    fn chunk_delta_extracted_from_first_choice() {
        let raw = r#"{"choices":[{"delta":{"content":"别"}}]}"#;
        let chunk: StreamChunk = serde_json::from_str(raw).expect("valid chunk");
        assert_eq!(chunk.into_delta().as_deref(), Some("别"));
    }

    #[test]
    fn empty_delta_content_is_skipped() {
        let raw = r#"{"choices":[{"delta":{"content":""}}]}"#;
        let chunk: StreamChunk = serde_json::from_str(raw).expect("valid chunk");
        assert!(chunk.into_delta().is_none());

        let raw = r#"{"choices":[{"delta":{}}]}"#;
        let chunk: StreamChunk = serde_json::from_str(raw).expect("valid chunk");
        assert!(chunk.into_delta().is_none());
    }
}
