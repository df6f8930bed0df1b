//! Chat message list component.

use leptos::prelude::*;

use crate::chat::Message;

use super::ChatMessage;

/// Container for chat messages.
///
/// Renders the conversation so far plus a hidden typing-indicator bubble.
/// New bubbles returned by `POST /api/chat` are appended into `#messages`
/// by HTMX; the indicator is revealed while that request is in flight.
#[component]
pub fn ChatMessageList(
    /// Conversation history, oldest first.
    messages: Vec<Message>,
) -> impl IntoView {
    view! {
        <div class="flex-1 overflow-y-auto px-4 py-6" aria-live="polite" aria-label="Chat messages">
            <div id="messages" class="max-w-4xl mx-auto">
                {messages
                    .into_iter()
                    .map(|msg| view! {
                        <ChatMessage
                            message=msg.text
                            is_user=msg.is_user
                            is_loading=msg.is_loading
                            appointment_data=msg.appointment_data
                        />
                    })
                    .collect_view()}
            </div>

            <div id="typing-indicator" class="htmx-indicator max-w-4xl mx-auto">
                <ChatMessage message=String::new() is_user=false is_loading=true />
            </div>
        </div>
    }
}
