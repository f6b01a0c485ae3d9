//! Single message row in the chat room.

use leptos::prelude::*;

use crate::net::types::Message;

/// One message, styled differently for the author's own entries.
#[component]
pub fn MessageBubble(message: Message, #[prop(optional)] own: bool) -> impl IntoView {
    let Message { username, text, .. } = message;
    view! {
        <div class="message" class:message--own=own>
            <span class="message__author">{username}</span>
            <span class="message__text">{text}</span>
        </div>
    }
}
