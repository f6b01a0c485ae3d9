//! Durable key-value mirror of the auth session.
//!
//! TRADE-OFFS
//! ==========
//! The cache is a best-effort copy of two session fields, not a source of
//! truth: the backend session can expire while the cached flag still reads
//! `true`. The route guard knowingly trusts the flag in that window (see
//! `util::guard`). Writes are last-writer-wins; cross-tab consistency is not
//! provided.

#[cfg(test)]
#[path = "session_cache_test.rs"]
mod session_cache_test;

/// Cache key for the authentication flag, stored as a JSON bool.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// Cache key for the username, stored raw.
pub const USERNAME_KEY: &str = "username";

/// String-keyed, string-valued storage that outlives a single run.
pub trait SessionCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Parse a cached auth flag; anything but a JSON `true` counts as signed out.
#[must_use]
pub fn parse_auth_flag(raw: Option<String>) -> bool {
    raw.map(|value| serde_json::from_str::<bool>(&value).unwrap_or(false))
        .unwrap_or(false)
}

/// `localStorage`-backed cache. All operations no-op on the server so SSR
/// stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionCache;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionCache for BrowserSessionCache {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
