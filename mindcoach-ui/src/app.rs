//! App Root Component
//!
//! Page shell: header with title, backend status and theme toggle, chat
//! interface below.

use leptos::*;

use crate::api;
use crate::components::{BackendStatus, ChatInterface, ThemeToggle};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Backend base URL is resolved once here and injected into the
    // components that talk to the API.
    let api_base = api::get_api_base();

    view! {
        <main class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white transition-colors">
            <div class="container mx-auto px-4 py-8 max-w-4xl">
                <header class="flex justify-between items-center mb-8">
                    <div>
                        <h1 class="text-3xl font-bold mb-2">"Mental Coach"</h1>
                        <p class="text-gray-500 dark:text-gray-400">
                            "Your supportive AI companion for stress, motivation, habits, and confidence"
                        </p>
                        <div class="mt-2">
                            <BackendStatus api_base=api_base.clone() />
                        </div>
                    </div>
                    <ThemeToggle />
                </header>

                <ChatInterface api_base=api_base />
            </div>
        </main>
    }
}
