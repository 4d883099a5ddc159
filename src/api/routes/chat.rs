//! Chat Route
//!
//! Relays user messages to the OpenAI chat completions API and returns
//! the coaching reply.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ChatRequest, ChatResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/chat
///
/// Request: `{"message": "..."}`. Response: `{"reply": "..."}`.
/// Returns 503 when no OpenAI API key is configured.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    if request.message.trim().is_empty() {
        return Err(ApiError::Validation("message must not be empty".to_string()));
    }

    let openai = state.openai.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("OPENAI_API_KEY not configured".to_string())
    })?;

    tracing::debug!(chars = request.message.len(), "Relaying chat message");

    let reply = openai.complete(&request.message).await?;

    Ok(Json(ChatResponse { reply }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;

    #[tokio::test]
    async fn test_chat_without_key_is_unavailable() {
        let state = Arc::new(AppState::new(ApiConfig::default()));

        let result = chat(
            State(state),
            Json(ChatRequest {
                message: "I need some motivation".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        let state = Arc::new(AppState::new(ApiConfig::default()));

        let result = chat(
            State(state),
            Json(ChatRequest {
                message: "   ".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
