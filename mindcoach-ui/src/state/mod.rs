//! State Management
//!
//! Cross-component state helpers.

pub mod theme;

pub use theme::Theme;
