//! HTTP implementation of the [`Backend`] trait.
//!
//! Client-side (hydrate): real JSON calls via `gloo-net` against a
//! same-origin REST API. Server-side (SSR): stubs returning
//! `Unavailable`, since these endpoints are only meaningful in the browser.
//!
//! The live identity is a locally cached copy of the last auth response,
//! refreshed once at startup from `GET {base}/auth/me`. Reads of
//! [`Backend::current_identity`] are synchronous and never hit the network.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Mutex, MutexGuard};

#[cfg(feature = "hydrate")]
use serde::Deserialize;

use crate::net::backend::{Backend, Credential, Identity};
use crate::net::error::{AuthError, QueryError};
use crate::net::types::{ChatRecord, NewChat, UserRecord};

/// Where the backend lives. Constructed once at the composition root and
/// handed to [`HttpBackend::new`]; no ambient configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the REST API, no trailing slash.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: "/api".to_owned() }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn register_endpoint(&self) -> String {
        format!("{}/auth/register", self.base_url)
    }

    #[must_use]
    pub fn login_endpoint(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    #[must_use]
    pub fn logout_endpoint(&self) -> String {
        format!("{}/auth/logout", self.base_url)
    }

    #[must_use]
    pub fn me_endpoint(&self) -> String {
        format!("{}/auth/me", self.base_url)
    }

    #[must_use]
    pub fn users_endpoint(&self) -> String {
        format!("{}/users", self.base_url)
    }

    #[must_use]
    pub fn chats_endpoint(&self) -> String {
        format!("{}/chats", self.base_url)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_error_for_status(status: u16) -> AuthError {
    match status {
        409 => AuthError::AccountExists,
        400 | 401 | 403 => AuthError::InvalidCredentials,
        other => AuthError::Network(format!("status {other}")),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn query_error_for_status(status: u16) -> QueryError {
    match status {
        401 | 403 => QueryError::PermissionDenied,
        other => QueryError::Network(format!("status {other}")),
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct MeResponse {
    email: String,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

/// REST-backed [`Backend`].
pub struct HttpBackend {
    pub config: BackendConfig,
    identity: Mutex<Option<Identity>>,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config, identity: Mutex::new(None) }
    }

    fn locked_identity(&self) -> MutexGuard<'_, Option<Identity>> {
        self.identity
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Sync the cached identity with the server session, once, at startup.
    ///
    /// A definitive "not signed in" response clears the cached identity; a
    /// transport failure leaves it untouched so the session cache fallback in
    /// the route guard still applies.
    pub async fn refresh_identity(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Ok(resp) = gloo_net::http::Request::get(&self.config.me_endpoint())
                .send()
                .await
            else {
                return;
            };
            if !resp.ok() {
                *self.locked_identity() = None;
                return;
            }
            if let Ok(me) = resp.json::<MeResponse>().await {
                *self.locked_identity() = Some(Identity { email: me.email });
            }
        }
    }

    #[cfg(feature = "hydrate")]
    async fn sign_in_request(&self, url: &str, email: &str, password: &str)
    -> Result<Credential, AuthError> {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(url)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(auth_error_for_status(resp.status()));
        }
        let identity = Identity { email: email.to_owned() };
        *self.locked_identity() = Some(identity.clone());
        Ok(Credential { user: identity })
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for HttpBackend {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Credential, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            self.sign_in_request(&self.config.register_endpoint(), email, password)
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Credential, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            self.sign_in_request(&self.config.login_endpoint(), email, password)
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.logout_endpoint())
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(auth_error_for_status(resp.status()));
            }
            *self.locked_identity() = None;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    fn current_identity(&self) -> Option<Identity> {
        self.locked_identity().clone()
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, QueryError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.users_endpoint())
                .send()
                .await
                .map_err(|e| QueryError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(query_error_for_status(resp.status()));
            }
            resp.json::<Vec<UserRecord>>()
                .await
                .map_err(|e| QueryError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(QueryError::Unavailable)
        }
    }

    async fn chats_with_participant(&self, username: &str)
    -> Result<Vec<ChatRecord>, QueryError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.chats_endpoint())
                .query([("participant", username)])
                .send()
                .await
                .map_err(|e| QueryError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(query_error_for_status(resp.status()));
            }
            resp.json::<Vec<ChatRecord>>()
                .await
                .map_err(|e| QueryError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
            Err(QueryError::Unavailable)
        }
    }

    async fn add_chat(&self, chat: &NewChat) -> Result<String, QueryError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.chats_endpoint())
                .json(chat)
                .map_err(|e| QueryError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| QueryError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(query_error_for_status(resp.status()));
            }
            let body: CreatedResponse = resp
                .json()
                .await
                .map_err(|e| QueryError::Decode(e.to_string()))?;
            Ok(body.id)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = chat;
            Err(QueryError::Unavailable)
        }
    }
}
