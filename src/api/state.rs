//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::openai::OpenAiClient;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// OpenAI client (None when no API key is configured)
    pub openai: Option<Arc<OpenAiClient>>,
}

impl AppState {
    /// Create a new AppState without OpenAI integration
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
            openai: None,
        }
    }

    /// Create AppState with OpenAI integration
    pub fn with_openai(config: ApiConfig, openai: Arc<OpenAiClient>) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
            openai: Some(openai),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check if an OpenAI API key is configured
    pub fn openai_configured(&self) -> bool {
        self.openai.is_some()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
            request_timeout_ms: 30_000,
            max_body_size: 64 * 1024, // 64KB, chat messages are small
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
