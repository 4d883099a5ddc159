//! Health Route
//!
//! Health check endpoint polled by the web UI to display backend
//! connection status.
//!
//! - GET /api/health - Liveness plus OpenAI key presence

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /api/health
///
/// Returns 200 whenever the process is alive. `openai_configured` tells
/// the UI whether chat replies can actually be generated.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        openai_configured: state.openai_configured(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;

    #[tokio::test]
    async fn test_health_without_key() {
        let state = Arc::new(AppState::new(ApiConfig::default()));

        let Json(body) = health(State(state)).await;

        assert_eq!(body.status, "ok");
        assert!(!body.openai_configured);
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_with_key() {
        use crate::openai::{OpenAiClient, OpenAiConfig};

        let openai = OpenAiClient::new(OpenAiConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        });
        let state = Arc::new(AppState::with_openai(
            ApiConfig::default(),
            Arc::new(openai),
        ));

        let Json(body) = health(State(state)).await;

        assert!(body.openai_configured);
    }
}
