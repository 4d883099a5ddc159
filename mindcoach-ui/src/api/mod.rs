//! API Client
//!
//! HTTP client functions for the Mindcoach REST API.

pub mod client;

pub use client::{check_health, get_api_base, send_message, HealthResponse, DEFAULT_API_BASE};
