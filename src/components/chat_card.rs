//! Clickable card for one chat in the home-page list.

use leptos::prelude::*;

/// A chat entry linking to its room.
#[component]
pub fn ChatCard(id: String, title: String) -> impl IntoView {
    let href = format!("/chat/{id}");
    view! {
        <a class="chat-card" href=href>
            <span class="chat-card__title">{title}</span>
            <span class="chat-card__id">{id}</span>
        </a>
    }
}
