//! Chat Interface Component
//!
//! Message list and submission form for talking to the coach.

use leptos::*;

use crate::api;

/// Who authored a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Coach,
}

/// A single chat message
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Local wall-clock time, preformatted for display
    pub sent_at: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            sent_at: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

/// Chat interface component
#[component]
pub fn ChatInterface(
    /// Base URL of the backend API
    #[prop(into)]
    api_base: String,
) -> impl IntoView {
    let (messages, set_messages) = create_signal(Vec::<ChatMessage>::new());
    let (input, set_input) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = input.get().trim().to_string();
        if text.is_empty() || sending.get() {
            return;
        }

        set_messages.update(|m| m.push(ChatMessage::new(Role::User, text.clone())));
        set_input.set(String::new());
        set_error.set(None);
        set_sending.set(true);

        let api_base = api_base.clone();
        spawn_local(async move {
            match api::send_message(&api_base, &text).await {
                Ok(reply) => {
                    let _ = set_messages.try_update(|m| {
                        m.push(ChatMessage::new(Role::Coach, reply));
                    });
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_sending.try_set(false);
        });
    };

    view! {
        <section class="bg-gray-100 dark:bg-gray-800 rounded-xl p-4 flex flex-col h-[32rem]">
            // Message list
            <div class="flex-1 overflow-y-auto space-y-3 mb-4">
                {move || {
                    let msgs = messages.get();
                    if msgs.is_empty() {
                        view! {
                            <p class="text-gray-500 dark:text-gray-400 text-center mt-8">
                                "What's on your mind today?"
                            </p>
                        }.into_view()
                    } else {
                        msgs.into_iter().map(|msg| view! {
                            <MessageBubble message=msg />
                        }).collect_view()
                    }
                }}

                // Typing indicator while a reply is pending
                {move || sending.get().then(|| view! {
                    <div class="flex items-center gap-2 text-sm text-gray-500 dark:text-gray-400">
                        <span class="w-2 h-2 bg-gray-400 rounded-full animate-pulse" />
                        <span>"Coach is thinking..."</span>
                    </div>
                })}
            </div>

            // Inline error
            {move || error.get().map(|e| view! {
                <p class="text-red-600 dark:text-red-400 text-sm mb-2">{e}</p>
            })}

            // Input form
            <form on:submit=on_submit class="flex gap-2">
                <input
                    type="text"
                    placeholder="Tell me what's going on..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    class="flex-1 bg-white dark:bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || sending.get() || input.get().trim().is_empty()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400 dark:disabled:bg-gray-600
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || if sending.get() { "..." } else { "Send" }}
                </button>
            </form>
        </section>
    }
}

/// A single message bubble
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (wrapper, bubble) = match message.role {
        Role::User => (
            "flex justify-end",
            "bg-primary-600 text-white rounded-lg rounded-br-none px-4 py-2 max-w-[80%]",
        ),
        Role::Coach => (
            "flex justify-start",
            "bg-white dark:bg-gray-700 rounded-lg rounded-bl-none px-4 py-2 max-w-[80%]",
        ),
    };

    view! {
        <div class=wrapper>
            <div class=bubble>
                <p class="whitespace-pre-wrap">{message.content}</p>
                <p class="text-xs opacity-60 mt-1">{message.sent_at}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_roles() {
        let user = ChatMessage::new(Role::User, "I can't focus");
        let coach = ChatMessage::new(Role::Coach, "Let's break it down.");

        assert_eq!(user.role, Role::User);
        assert_eq!(coach.role, Role::Coach);
        assert_eq!(user.content, "I can't focus");
    }

    #[test]
    fn test_message_timestamp_format() {
        let msg = ChatMessage::new(Role::User, "hi");

        // "%H:%M" - two digits, colon, two digits
        assert_eq!(msg.sent_at.len(), 5);
        assert_eq!(msg.sent_at.as_bytes()[2], b':');
    }
}
