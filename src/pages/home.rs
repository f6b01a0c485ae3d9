//! Home page: user directory and the signed-in user's chat list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It refreshes the user and chat
//! listings once on mount and coordinates the create-chat -> navigate flow.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::chat_card::ChatCard;
use crate::net::types::{ChatRecord, NewChat, UserRecord};
use crate::state::store::Store;
#[cfg(feature = "hydrate")]
use crate::util::guard::LOGIN_PATH;

/// Title shown for a chat: its name, else the other participants.
pub(crate) fn chat_title(chat: &ChatRecord, me: &str) -> String {
    if let Some(name) = &chat.name {
        if !name.trim().is_empty() {
            return name.clone();
        }
    }
    let others: Vec<&str> = chat
        .participants
        .iter()
        .map(String::as_str)
        .filter(|participant| *participant != me)
        .collect();
    if others.is_empty() {
        "Just you".to_owned()
    } else {
        others.join(", ")
    }
}

/// Directory label for a user row.
pub(crate) fn display_name(user: &UserRecord) -> &str {
    user.display_name.as_deref().unwrap_or(&user.email)
}

/// Pair chat payload for the signed-in user and one directory entry.
pub(crate) fn pair_chat(me: &str, other: &str) -> NewChat {
    NewChat { name: None, participants: vec![me.to_owned(), other.to_owned()] }
}

/// Home page — user directory, chat list, create-chat and logout actions.
#[component]
pub fn HomePage(store: Store) -> impl IntoView {
    let version = RwSignal::new(0u64);
    store.subscribe(move || version.update(|v| *v += 1));

    let status = RwSignal::new(String::new());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = store.fetch_users().await {
                status.set(format!("Could not load users: {err}"));
            }
            if let Err(err) = store.fetch_chats().await {
                status.set(format!("Could not load chats: {err}"));
            }
        });
    }

    let greeting_store = store.clone();
    let greeting = move || {
        version.get();
        greeting_store.username()
    };

    let start_chat_store = store.clone();
    #[cfg(feature = "hydrate")]
    let start_chat_navigate = navigate.clone();
    let on_start_chat = move |other: String| {
        let me = start_chat_store.username();
        if other == me {
            status.set("That chat would just be you.".to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let store = start_chat_store.clone();
            let navigate = start_chat_navigate.clone();
            leptos::task::spawn_local(async move {
                match store.add_chat(pair_chat(&store.username(), &other)).await {
                    Ok(id) => navigate(&format!("/chat/{id}"), NavigateOptions::default()),
                    Err(err) => status.set(format!("Could not create chat: {err}")),
                }
            });
        }
    };

    let logout_store = store.clone();
    #[cfg(feature = "hydrate")]
    let logout_navigate = navigate.clone();
    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let store = logout_store.clone();
            let navigate = logout_navigate.clone();
            leptos::task::spawn_local(async move {
                match store.logout().await {
                    Ok(()) => navigate(LOGIN_PATH, NavigateOptions::default()),
                    Err(err) => status.set(format!("Logout failed: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &logout_store;
        }
    };

    let users_store = store.clone();
    let users_view = move || {
        version.get();
        let me = users_store.username();
        users_store
            .users()
            .into_iter()
            .map(|user| {
                let email = user.email.clone();
                let label = display_name(&user).to_owned();
                let is_me = email == me;
                let chat_button = (!is_me).then(|| {
                    let on_start_chat = on_start_chat.clone();
                    view! {
                        <button
                            class="user-row__chat"
                            on:click=move |_| on_start_chat(email.clone())
                        >
                            "Chat"
                        </button>
                    }
                });
                view! {
                    <li class="user-row">
                        <span class="user-row__name">{label}</span>
                        {chat_button}
                    </li>
                }
            })
            .collect_view()
    };

    let chats_store = store;
    let chats_view = move || {
        version.get();
        let me = chats_store.username();
        chats_store
            .chats()
            .into_iter()
            .map(|chat| {
                let title = chat_title(&chat, &me);
                view! { <ChatCard id=chat.id title=title/> }
            })
            .collect_view()
    };

    let _ = navigate;

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"Talkboard"</h1>
                <span class="home-header__user">{greeting}</span>
                <button class="home-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <p class="home-status">{move || status.get()}</p>
            <section class="home-section">
                <h2>"Your chats"</h2>
                <div class="chat-list">{chats_view}</div>
            </section>
            <section class="home-section">
                <h2>"People"</h2>
                <ul class="user-list">{users_view}</ul>
            </section>
        </div>
    }
}
