//! # Mindcoach
//!
//! Mental Coach - A full-stack Rust chat application providing a supportive
//! AI companion for stress, motivation, habits, and confidence.
//!
//! ## Features
//!
//! - **Chat API**: Relays user messages to the OpenAI chat completions API
//!   with a coaching system prompt
//! - **Health endpoint**: Reports service liveness and whether an OpenAI
//!   API key is configured, polled by the web UI
//! - **Configurable**: TOML config files with environment overrides
//!
//! ## Modules
//!
//! - [`api`]: REST API server with Axum
//! - [`openai`]: OpenAI chat completions client
//! - [`config`]: Configuration loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mindcoach::api::{serve, ApiConfig, AppState};
//! use mindcoach::openai::{OpenAiClient, OpenAiConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!
//!     let openai = OpenAiClient::new(OpenAiConfig {
//!         api_key: std::env::var("OPENAI_API_KEY")?,
//!         ..Default::default()
//!     });
//!
//!     let state = AppState::with_openai(config.clone(), Arc::new(openai));
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod openai;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, ApiResult, AppState};

pub use openai::{OpenAiClient, OpenAiConfig, OpenAiError};

pub use config::{
    Config, ConfigError, ApiConfig as ConfigApiConfig, OpenAiConfig as ConfigOpenAiConfig,
    LoggingConfig,
};
