//! Startup configuration for the chat API.
//!
//! The config is resolved once at process start and passed into the
//! transport; nothing reads the environment mid-request.

use crate::error::ChatApiError;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

const API_KEY_VAR: &str = "MOODMATE_API_KEY";
const BASE_URL_VAR: &str = "MOODMATE_BASE_URL";
const MODEL_VAR: &str = "MOODMATE_MODEL";

/// Credential and endpoint settings for one chat API.
#[derive(Debug, Clone)]
pub struct ChatApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ChatApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Resolves the config from environment variables.
    ///
    /// `MOODMATE_API_KEY` is required; a missing or empty key is a
    /// configuration error detected before any request is made.
    /// `MOODMATE_BASE_URL` and `MOODMATE_MODEL` override the defaults.
    pub fn from_env() -> Result<Self, ChatApiError> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ChatApiError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url);
            }
        }
        if let Ok(model) = env::var(MODEL_VAR) {
            if !model.trim().is_empty() {
                config = config.with_model(model);
            }
        }
        Ok(config)
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
