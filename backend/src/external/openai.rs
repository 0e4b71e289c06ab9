//! OpenAI chat completions client
//!
//! Only the fields the advisory handler reads are modelled; all other
//! provider metadata is tolerated on deserialization and discarded.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Client for the chat completions API
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// One entry in a completion request conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for POST /chat/completions
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response body; completions may be absent or empty
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first completion, if the provider returned one.
    pub fn first_completion(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

impl OpenAiClient {
    /// Create a new OpenAiClient
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Issue one completion request. Non-success provider status is an
    /// upstream error; the body is parsed leniently so a missing
    /// completions array is not a parse failure.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> AppResult<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::upstream("AI", None, format!("OpenAI API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("OpenAI API returned {}", status);
            return Err(AppError::upstream(
                "AI",
                Some(status.as_u16()),
                format!("OpenAI API returned {}", status.as_u16()),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::upstream("AI", None, format!("Failed to parse OpenAI response: {}", e))
        })
    }
}
