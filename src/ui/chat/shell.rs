//! Chat shell layout component.

use leptos::prelude::*;

use crate::chat::Message;

use super::{ChatHeader, ChatInputArea, ChatMessageList};

/// Main chat shell component.
///
/// Provides the complete chat interface layout with:
/// - Header with branding and logout
/// - Scrollable message area
/// - Input area for new messages
#[component]
pub fn ChatShell(
    /// Conversation history, oldest first.
    messages: Vec<Message>,
) -> impl IntoView {
    view! {
        <div class="chat-shell flex flex-col h-screen bg-background">
            <ChatHeader />

            <ChatMessageList messages=messages />

            <ChatInputArea />
        </div>
    }
}
