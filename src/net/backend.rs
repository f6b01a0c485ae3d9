//! Backend capability consumed by the state store and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote service is opaque: account auth plus document-collection
//! operations. Everything here is a trait so the store can be driven by a
//! stub in native tests and by the HTTP implementation in the browser.

use crate::net::error::{AuthError, QueryError};
use crate::net::types::{ChatRecord, NewChat, UserRecord};

/// The signed-in identity as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// Result of a successful sign-up or sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub user: Identity,
}

/// Remote auth + document operations.
///
/// Futures returned by these methods are not `Send` (`wasm` constraint), but
/// implementations themselves must be shareable handles.
#[async_trait::async_trait(?Send)]
pub trait Backend: Send + Sync {
    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AccountExists`] for duplicate accounts, otherwise
    /// credential or transport failures.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Credential, AuthError>;

    /// Sign in with email + password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on rejection, or a transport
    /// failure.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Credential, AuthError>;

    /// Sign out the current session.
    ///
    /// # Errors
    ///
    /// Returns a transport failure; the local session is still cleared by the
    /// caller on success only.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The live identity, if the backend currently reports one.
    fn current_identity(&self) -> Option<Identity>;

    /// Read the whole `users` collection.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] on transport, permission, or decode failure.
    async fn list_users(&self) -> Result<Vec<UserRecord>, QueryError>;

    /// Query `chats` whose participant list contains `username`.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] on transport, permission, or decode failure.
    async fn chats_with_participant(&self, username: &str)
    -> Result<Vec<ChatRecord>, QueryError>;

    /// Add a chat document; returns the backend-assigned id.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] on transport, permission, or decode failure.
    /// The document may or may not exist remotely after a transport failure.
    async fn add_chat(&self, chat: &NewChat) -> Result<String, QueryError>;
}
