//! UI Components
//!
//! Leptos components for the chat front-end.

pub mod backend_status;
pub mod chat;
pub mod theme_toggle;

pub use backend_status::BackendStatus;
pub use chat::ChatInterface;
pub use theme_toggle::ThemeToggle;
