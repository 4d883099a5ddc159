//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// CHAT DTOs
// ============================================

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message to the coach
    pub message: String,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The coach's reply
    pub reply: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
///
/// The UI status poller only relies on `status` and `openai_configured`;
/// the remaining fields are informational.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok"
    pub status: String,
    /// Whether an OpenAI API key is configured
    pub openai_configured: bool,
    /// Seconds since server start
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
