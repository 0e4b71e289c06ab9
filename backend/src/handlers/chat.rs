//! HTTP handler for the advisory chat endpoint

use axum::{extract::State, Json};

use shared::{ChatRequest, ChatResponse};

use crate::error::{AppError, AppResult};
use crate::external::OpenAiClient;
use crate::services::AdvisoryService;
use crate::AppState;

/// Forward one user message to the AI provider
/// POST /api/chat
///
/// Validation and credential checks run before any outbound call. The
/// running transcript lives in the browser; only the single message is
/// sent upstream.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = match request.message.as_deref() {
        Some(message) if !message.trim().is_empty() => message,
        _ => return Err(AppError::Validation("Message is required".to_string())),
    };

    let openai = &state.config.openai;
    if openai.api_key.is_empty() {
        return Err(AppError::Configuration(
            "OpenAI API key not configured".to_string(),
        ));
    }

    let client = OpenAiClient::new(
        state.http.clone(),
        openai.api_key.clone(),
        openai.api_endpoint.clone(),
    );
    let service = AdvisoryService::new(client, openai);
    let response = service.advise(message).await?;

    Ok(Json(ChatResponse { response }))
}
