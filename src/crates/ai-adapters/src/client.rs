//! HTTP transport for the chat-completions endpoint.

use crate::config::ChatApiConfig;
use crate::error::ChatApiError;
use crate::stream::{spawn_response_pump, DeltaResult};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use log::debug;
use moodmate_core_types::ChatMessage;
use tokio::sync::mpsc;

/// Receiving end of a streaming reply. The channel closes when the reply
/// is complete.
pub type DeltaReceiver = mpsc::UnboundedReceiver<DeltaResult>;

/// The two request shapes the product issues against the same endpoint.
///
/// The session layer is written against this trait so tests can substitute
/// a scripted transport.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Non-streaming call; awaits the full body and returns the first
    /// choice's message text.
    async fn initial_advice(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatApiError>;

    /// Streaming call; validates the response status, then returns the
    /// delta channel for the caller to drain.
    async fn stream_chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<DeltaReceiver, ChatApiError>;
}

/// Reqwest-backed [`ChatTransport`].
pub struct ChatClient {
    client: reqwest::Client,
    config: ChatApiConfig,
}

impl ChatClient {
    pub fn new(config: ChatApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// One system entry first, then the windowed history.
    fn build_messages(system_prompt: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(system_prompt));
        messages.extend_from_slice(history);
        messages
    }

    async fn post(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<reqwest::Response, ChatApiError> {
        debug!(
            "POST {} ({} messages, stream={})",
            self.config.chat_completions_url(),
            request.messages.len(),
            request.stream
        );

        let response = self
            .client
            .post(self.config.chat_completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(ChatApiError::Http { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatTransport for ChatClient {
    async fn initial_advice(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatApiError> {
        let messages = vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_message),
        ];
        let request = ChatCompletionRequest::buffered(&self.config.model, messages);

        let response = self.post(&request).await?;
        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                ChatApiError::MalformedResponse("chat completion body")
            } else {
                ChatApiError::Network(e)
            }
        })?;

        parsed
            .into_content()
            .ok_or(ChatApiError::MalformedResponse("choices[0].message.content"))
    }

    async fn stream_chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<DeltaReceiver, ChatApiError> {
        let messages = Self::build_messages(system_prompt, history);
        let request = ChatCompletionRequest::streaming(&self.config.model, messages);

        // Status is validated before any stream consumption begins.
        let response = self.post(&request).await?;
        Ok(spawn_response_pump(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmate_core_types::ChatRole;

    #[test]
    fn system_entry_always_leads_the_message_list() {
        let history = vec![ChatMessage::user("你好"), ChatMessage::assistant("嗯")];
        let messages = ChatClient::build_messages("prompt", &history);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, "prompt");
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[2].role, ChatRole::Assistant);
    }
}
