//! Mindcoach Web UI
//!
//! Chat front-end for the Mental Coach assistant, built with Leptos (WASM).
//!
//! # Features
//!
//! - Chat interface backed by the Mindcoach API
//! - Backend connection status with OpenAI key detection
//! - Light/dark theme toggle
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Mindcoach API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
