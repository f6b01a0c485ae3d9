//! Chat room page: message history plus a composer.
//!
//! Messages are kept in the store only; the live action set has no backend
//! send, so the composer appends locally and the list re-renders off the
//! store's change notifications.

#[cfg(test)]
#[path = "chat_room_test.rs"]
mod chat_room_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::message_bubble::MessageBubble;
use crate::net::types::Message;
use crate::pages::home::chat_title;
use crate::state::store::Store;
use crate::util::time::now_ms;

/// Reject empty drafts; returns the trimmed body otherwise.
pub(crate) fn validate_draft(draft: &str) -> Option<String> {
    let text = draft.trim();
    if text.is_empty() { None } else { Some(text.to_owned()) }
}

/// Build the message appended when the composer submits.
pub(crate) fn outgoing_message(username: &str, text: &str, timestamp: f64) -> Message {
    Message { username: username.to_owned(), text: text.to_owned(), timestamp }
}

/// Chat room page for `/chat/:id`.
#[component]
pub fn ChatRoomPage(store: Store) -> impl IntoView {
    let version = RwSignal::new(0u64);
    store.subscribe(move || version.update(|v| *v += 1));

    let params = use_params_map();
    let chat_id = move || params.read().get("id").unwrap_or_default();

    let draft = RwSignal::new(String::new());

    let title_store = store.clone();
    let title = move || {
        version.get();
        let me = title_store.username();
        title_store
            .chats()
            .into_iter()
            .find(|chat| chat.id == chat_id())
            .map_or_else(|| "Chat".to_owned(), |chat| chat_title(&chat, &me))
    };

    let send_store = store.clone();
    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = validate_draft(&draft.get()) else {
            return;
        };
        let username = send_store.username();
        send_store.add_message(outgoing_message(&username, &text, now_ms()));
        draft.set(String::new());
    };

    let list_store = store;
    let messages_view = move || {
        version.get();
        let me = list_store.username();
        list_store
            .messages()
            .into_iter()
            .map(|message| {
                let own = message.username == me;
                view! { <MessageBubble message=message own=own/> }
            })
            .collect_view()
    };

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <a class="chat-header__back" href="/home">
                    "< Back"
                </a>
                <h1 class="chat-header__title">{title}</h1>
            </header>
            <div class="chat-messages">{messages_view}</div>
            <form class="chat-composer" on:submit=on_send>
                <input
                    class="chat-composer__input"
                    type="text"
                    placeholder="Write a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="chat-composer__send" type="submit">
                    "Send"
                </button>
            </form>
        </div>
    }
}
