//! OpenAI Integration
//!
//! Client for the OpenAI chat completions API. All coaching replies are
//! produced by relaying the user's message together with a fixed system
//! prompt.

pub mod client;

pub use client::{OpenAiClient, OpenAiConfig, OpenAiError};
