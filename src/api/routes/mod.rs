//! API Route Handlers

pub mod chat;
pub mod health;
