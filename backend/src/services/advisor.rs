//! Advisory chat service
//!
//! Wraps the chat completions client with the farm-advisor persona. Each
//! call is stateless from the provider's perspective: exactly two
//! messages (system instruction, user message) are sent, never the
//! running transcript.

use crate::config::OpenAiConfig;
use crate::error::AppResult;
use crate::external::openai::{ChatCompletionRequest, ChatMessage, OpenAiClient};

/// Persona and domain constraints for the assistant
const SYSTEM_PROMPT: &str = "You are a helpful farm advisor AI assistant. Provide practical, \
     accurate advice about farming, agriculture, crop management, weather considerations, \
     pest control, soil health, and agricultural best practices. Keep responses concise \
     but informative.";

/// Returned when the provider response lacks a usable completion
pub const FALLBACK_REPLY: &str = "Sorry, I could not generate a response.";

/// Advisory chat service
#[derive(Clone)]
pub struct AdvisoryService {
    client: OpenAiClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AdvisoryService {
    pub fn new(client: OpenAiClient, config: &OpenAiConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Build the two-message conversation for one user message.
    fn build_request(&self, message: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Ask the provider for advice. A response without a completion
    /// degrades to a fixed fallback string rather than an error.
    pub async fn advise(&self, message: &str) -> AppResult<String> {
        let request = self.build_request(message);
        let response = self.client.complete(&request).await?;

        Ok(response
            .first_completion()
            .unwrap_or(FALLBACK_REPLY)
            .to_string())
    }
}
