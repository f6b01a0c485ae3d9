use super::*;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::net::backend::{Credential, Identity};
use crate::net::error::{AuthError, QueryError};
use crate::net::types::{ChatRecord, NewChat, UserRecord};

struct StubBackend {
    identity: Option<Identity>,
}

#[async_trait::async_trait(?Send)]
impl Backend for StubBackend {
    async fn sign_up(&self, _email: &str, _password: &str) -> Result<Credential, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Credential, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, QueryError> {
        Ok(Vec::new())
    }

    async fn chats_with_participant(
        &self,
        _username: &str,
    ) -> Result<Vec<ChatRecord>, QueryError> {
        Ok(Vec::new())
    }

    async fn add_chat(&self, _chat: &NewChat) -> Result<String, QueryError> {
        Err(QueryError::Unavailable)
    }
}

#[derive(Default)]
struct MapCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MapCache {
    fn with_flag(raw: &str) -> Self {
        let cache = Self::default();
        cache.set(AUTH_FLAG_KEY, raw);
        cache
    }
}

impl SessionCache for MapCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(key);
    }
}

fn live_identity() -> StubBackend {
    StubBackend { identity: Some(Identity { email: "a@x.com".to_owned() }) }
}

fn no_identity() -> StubBackend {
    StubBackend { identity: None }
}

// =============================================================
// Route table matching
// =============================================================

#[test]
fn login_route_requires_no_auth() {
    assert!(!requires_auth("/"));
}

#[test]
fn home_route_requires_auth() {
    assert!(requires_auth("/home"));
    assert!(requires_auth("/home/"));
}

#[test]
fn chat_route_requires_auth_for_any_id() {
    assert!(requires_auth("/chat/abc123"));
    assert!(requires_auth("/chat/another-id"));
}

#[test]
fn chat_route_without_id_does_not_match() {
    assert!(!requires_auth("/chat"));
}

#[test]
fn unknown_routes_carry_no_requirement() {
    assert!(!requires_auth("/nope"));
    assert!(!requires_auth("/chat/a/b"));
}

#[test]
fn login_path_detection() {
    assert!(is_login_path("/"));
    assert!(!is_login_path("/home"));
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn protected_route_without_identity_redirects_to_login() {
    assert_eq!(decide("/home", false), GuardDecision::RedirectToLogin);
    assert_eq!(decide("/chat/c1", false), GuardDecision::RedirectToLogin);
}

#[test]
fn login_route_with_identity_redirects_to_home() {
    assert_eq!(decide("/", true), GuardDecision::RedirectToHome);
}

#[test]
fn login_route_without_identity_proceeds() {
    assert_eq!(decide("/", false), GuardDecision::Proceed);
}

#[test]
fn protected_route_with_identity_proceeds() {
    assert_eq!(decide("/home", true), GuardDecision::Proceed);
    assert_eq!(decide("/chat/c1", true), GuardDecision::Proceed);
}

#[test]
fn unknown_route_proceeds_either_way() {
    assert_eq!(decide("/nope", false), GuardDecision::Proceed);
    assert_eq!(decide("/nope", true), GuardDecision::Proceed);
}

// =============================================================
// Identity resolution
// =============================================================

#[test]
fn live_identity_wins() {
    let cache = MapCache::default();
    assert!(resolve_identity(&live_identity(), &cache));
}

#[test]
fn no_identity_and_empty_cache_is_signed_out() {
    let cache = MapCache::default();
    assert!(!resolve_identity(&no_identity(), &cache));
}

#[test]
fn cached_false_flag_is_signed_out() {
    let cache = MapCache::with_flag("false");
    assert!(!resolve_identity(&no_identity(), &cache));
}

// Documents the stale-cache trust: a cached `true` passes the guard even
// with no live backend session.
#[test]
fn cached_true_flag_counts_as_identity() {
    let cache = MapCache::with_flag("true");
    assert!(resolve_identity(&no_identity(), &cache));
    assert_eq!(decide("/home", resolve_identity(&no_identity(), &cache)), GuardDecision::Proceed);
}
