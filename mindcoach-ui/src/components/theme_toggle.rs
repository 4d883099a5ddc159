//! Theme Toggle Component
//!
//! Switches between light and dark mode.

use leptos::*;

use crate::state::theme::{self, Theme};

/// Theme toggle button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (current, set_current) = create_signal(theme::initial_theme());

    // Reflect the resolved theme before the first toggle
    theme::apply_theme(current.get_untracked());

    let toggle = move |_| {
        let next = current.get().toggled();
        theme::apply_theme(next);
        theme::store_theme(next);
        set_current.set(next);
    };

    view! {
        <button
            on:click=toggle
            title="Toggle theme"
            class="p-2 rounded-lg bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors"
        >
            {move || match current.get() {
                Theme::Dark => "🌙",
                Theme::Light => "☀️",
            }}
        </button>
    }
}
