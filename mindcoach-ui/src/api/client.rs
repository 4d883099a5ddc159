//! HTTP API Client
//!
//! Functions for communicating with the Mindcoach REST API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("mindcoach_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Health check response
///
/// Only `openai_configured` is load-bearing for the status display; the
/// other fields are optional so older or slimmer backends still parse.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    pub openai_configured: bool,
    #[serde(default)]
    pub uptime_seconds: u64,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ChatReply {
    reply: String,
}

/// Error envelope returned by the API
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    code: String,
    message: String,
}

/// Extract a human-readable message from an error response body
async fn error_message(response: gloo_net::http::Response) -> String {
    let status = response.status();
    response
        .json::<ApiErrorResponse>()
        .await
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("API returned status {}", status))
}

// ============ API Functions ============

/// Check API health
pub async fn check_health(api_base: &str) -> Result<HealthResponse, String> {
    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("API returned status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a chat message and return the coach's reply
pub async fn send_message(api_base: &str, message: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ChatReply = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_minimal_body() {
        let health: HealthResponse =
            serde_json::from_str(r#"{"openai_configured": true}"#).unwrap();

        assert!(health.openai_configured);
        assert_eq!(health.status, "");
        assert!(health.version.is_none());
    }

    #[test]
    fn test_health_response_full_body() {
        let health: HealthResponse = serde_json::from_str(
            r#"{"status": "ok", "openai_configured": false, "uptime_seconds": 42, "version": "0.1.0"}"#,
        )
        .unwrap();

        assert_eq!(health.status, "ok");
        assert!(!health.openai_configured);
        assert_eq!(health.uptime_seconds, 42);
    }

    #[test]
    fn test_error_envelope_parse() {
        let parsed: ApiErrorResponse = serde_json::from_str(
            r#"{"error": {"code": "SERVICE_UNAVAILABLE", "message": "OPENAI_API_KEY not configured"}, "request_id": "abc"}"#,
        )
        .unwrap();

        assert_eq!(parsed.error.message, "OPENAI_API_KEY not configured");
    }
}
