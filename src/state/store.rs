//! Application state store: the single mediator between UI, backend, and the
//! session cache.
//!
//! DESIGN
//! ======
//! `Store` is an explicitly constructed, clone-able handle — no ambient
//! global. Synchronous mutations are total and mirror auth fields to the
//! session cache; async actions wrap exactly one backend call each, log the
//! failure once, and return it to the caller unchanged. Locks are never held
//! across an `await`, so concurrently dispatched actions interleave only at
//! their backend calls.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::net::backend::Backend;
use crate::net::error::{AuthError, QueryError};
use crate::net::types::{ChatRecord, Message, NewChat, UserRecord};
use crate::util::session_cache::{AUTH_FLAG_KEY, SessionCache, USERNAME_KEY, parse_auth_flag};

type Watcher = Box<dyn Fn() + Send + Sync>;

/// In-memory state. The backend is the system of record for `users` and
/// `chats`; `messages` is local-only in the live action set.
#[derive(Clone, Debug, Default)]
struct StoreInner {
    is_authenticated: bool,
    username: String,
    messages: Vec<Message>,
    users: Vec<UserRecord>,
    chats: Vec<ChatRecord>,
}

/// Shared state container handed to pages and dialogs.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
    cache: Arc<dyn SessionCache>,
    inner: Arc<Mutex<StoreInner>>,
    watchers: Arc<Mutex<Vec<Watcher>>>,
}

impl Store {
    /// Build a store, seeding the session fields from the cache so a reload
    /// keeps the signed-in UI state.
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, cache: Arc<dyn SessionCache>) -> Self {
        let inner = StoreInner {
            is_authenticated: parse_auth_flag(cache.get(AUTH_FLAG_KEY)),
            username: cache.get(USERNAME_KEY).unwrap_or_default(),
            ..StoreInner::default()
        };
        Self {
            backend,
            cache,
            inner: Arc::new(Mutex::new(inner)),
            watchers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn locked(&self) -> MutexGuard<'_, StoreInner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Register a change watcher, invoked synchronously after every mutation.
    /// Watchers live as long as the store.
    pub fn subscribe(&self, watcher: impl Fn() + Send + Sync + 'static) {
        self.watchers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Box::new(watcher));
    }

    fn notify(&self) {
        let watchers = self
            .watchers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for watcher in watchers.iter() {
            watcher();
        }
    }

    // ---------------------------------------------------------
    // Mutations — synchronous, total
    // ---------------------------------------------------------

    /// Set the username and mirror it to the session cache.
    pub fn set_username(&self, username: &str) {
        {
            let mut inner = self.locked();
            inner.username = username.to_owned();
        }
        self.cache.set(USERNAME_KEY, username);
        self.notify();
    }

    /// Append a message. Messages are append-only; nothing mutates or
    /// removes an existing entry.
    pub fn add_message(&self, message: Message) {
        {
            let mut inner = self.locked();
            inner.messages.push(message);
        }
        self.notify();
    }

    /// Set both session fields and mirror them to the session cache.
    pub fn set_auth(&self, is_authenticated: bool, username: &str) {
        {
            let mut inner = self.locked();
            inner.is_authenticated = is_authenticated;
            inner.username = username.to_owned();
        }
        self.cache
            .set(AUTH_FLAG_KEY, if is_authenticated { "true" } else { "false" });
        self.cache.set(USERNAME_KEY, username);
        self.notify();
    }

    /// Reset the session fields and drop both cache keys.
    pub fn clear_auth(&self) {
        {
            let mut inner = self.locked();
            inner.is_authenticated = false;
            inner.username = String::new();
        }
        self.cache.remove(AUTH_FLAG_KEY);
        self.cache.remove(USERNAME_KEY);
        self.notify();
    }

    /// Replace the user list wholesale.
    pub fn set_users(&self, users: Vec<UserRecord>) {
        {
            let mut inner = self.locked();
            inner.users = users;
        }
        self.notify();
    }

    /// Replace the chat list wholesale.
    pub fn set_chats(&self, chats: Vec<ChatRecord>) {
        {
            let mut inner = self.locked();
            inner.chats = chats;
        }
        self.notify();
    }

    /// Append one chat. Append-only, so two concurrent `add_chat` actions
    /// cannot lose each other's entry the way a read-then-replace would.
    fn push_chat(&self, chat: ChatRecord) {
        {
            let mut inner = self.locked();
            inner.chats.push(chat);
        }
        self.notify();
    }

    // ---------------------------------------------------------
    // Actions — async, one backend call each
    // ---------------------------------------------------------

    /// Create an account, then mark the session authenticated as that user.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; session fields are left untouched.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.backend.sign_up(email, password).await {
            Ok(credential) => {
                self.set_username(&credential.user.email);
                self.set_auth(true, &credential.user.email);
                Ok(())
            }
            Err(err) => {
                log::error!("registration failed: {err}");
                Err(err)
            }
        }
    }

    /// Sign in and mark the session authenticated.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; session fields are left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.backend.sign_in(email, password).await {
            Ok(credential) => {
                self.set_auth(true, &credential.user.email);
                Ok(())
            }
            Err(err) => {
                log::error!("login failed: {err}");
                Err(err)
            }
        }
    }

    /// Sign out and clear the session. The local session is only cleared
    /// after the backend confirms.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; callers may ignore it for a
    /// fire-and-forget logout.
    pub async fn logout(&self) -> Result<(), AuthError> {
        match self.backend.sign_out().await {
            Ok(()) => {
                self.clear_auth();
                Ok(())
            }
            Err(err) => {
                log::error!("logout failed: {err}");
                Err(err)
            }
        }
    }

    /// Refresh the user directory, replacing the current list.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the stale list is retained.
    pub async fn fetch_users(&self) -> Result<(), QueryError> {
        match self.backend.list_users().await {
            Ok(users) => {
                self.set_users(users);
                Ok(())
            }
            Err(err) => {
                log::error!("user list fetch failed: {err}");
                Err(err)
            }
        }
    }

    /// Refresh the chat list for the current username, replacing (not
    /// merging) the current list.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the stale list is retained.
    pub async fn fetch_chats(&self) -> Result<(), QueryError> {
        let username = self.username();
        match self.backend.chats_with_participant(&username).await {
            Ok(chats) => {
                self.set_chats(chats);
                Ok(())
            }
            Err(err) => {
                log::error!("chat list fetch failed: {err}");
                Err(err)
            }
        }
    }

    /// Create a chat remotely, then append it locally under the
    /// backend-assigned id.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the chat is not added locally, though it
    /// may or may not exist remotely after a transport failure.
    pub async fn add_chat(&self, chat: NewChat) -> Result<String, QueryError> {
        match self.backend.add_chat(&chat).await {
            Ok(id) => {
                self.push_chat(ChatRecord {
                    id: id.clone(),
                    name: chat.name,
                    participants: chat.participants,
                    messages: Vec::new(),
                });
                Ok(id)
            }
            Err(err) => {
                log::error!("chat create failed: {err}");
                Err(err)
            }
        }
    }

    // ---------------------------------------------------------
    // Getters — snapshot reads
    // ---------------------------------------------------------

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.locked().is_authenticated
    }

    #[must_use]
    pub fn username(&self) -> String {
        self.locked().username.clone()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.locked().messages.clone()
    }

    #[must_use]
    pub fn users(&self) -> Vec<UserRecord> {
        self.locked().users.clone()
    }

    #[must_use]
    pub fn chats(&self) -> Vec<ChatRecord> {
        self.locked().chats.clone()
    }
}
