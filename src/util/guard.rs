//! Pre-navigation auth guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted on every route change (wired up in `app`). Identity is the live
//! backend session when one is reported, otherwise the cached auth flag.
//! Trusting the cached flag means a client whose server session expired still
//! passes the guard and fails on its first backend call; that weak-consistency
//! window is intentional, pending product clarification.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::backend::Backend;
use crate::util::session_cache::{AUTH_FLAG_KEY, SessionCache, parse_auth_flag};

/// Login route; also the application root.
pub const LOGIN_PATH: &str = "/";
/// Authenticated landing route.
pub const HOME_PATH: &str = "/home";
/// Chat room route pattern; `:id` is the backend chat id.
pub const CHAT_PATH_PATTERN: &str = "/chat/:id";

struct RouteSpec {
    pattern: &'static str,
    requires_auth: bool,
}

/// Route table mirrored by the `Routes` declaration in `app`.
const ROUTE_TABLE: &[RouteSpec] = &[
    RouteSpec { pattern: LOGIN_PATH, requires_auth: false },
    RouteSpec { pattern: HOME_PATH, requires_auth: true },
    RouteSpec { pattern: CHAT_PATH_PATTERN, requires_auth: true },
];

/// Segment-wise match; `:name` segments match any single non-empty segment.
fn path_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pat, seg)| pat.starts_with(':') || pat == seg)
}

/// Whether the destination declares an auth requirement.
///
/// Unknown paths fall through to the router's not-found view, so they carry
/// no requirement here.
#[must_use]
pub fn requires_auth(path: &str) -> bool {
    ROUTE_TABLE
        .iter()
        .find(|route| path_matches(route.pattern, path))
        .is_some_and(|route| route.requires_auth)
}

#[must_use]
pub fn is_login_path(path: &str) -> bool {
    path_matches(LOGIN_PATH, path)
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
    RedirectToHome,
}

/// Decision table: unauthenticated traffic bounces off protected routes,
/// signed-in traffic bounces off the login route.
#[must_use]
pub fn decide(path: &str, identity_present: bool) -> GuardDecision {
    if requires_auth(path) && !identity_present {
        return GuardDecision::RedirectToLogin;
    }
    if is_login_path(path) && identity_present {
        return GuardDecision::RedirectToHome;
    }
    GuardDecision::Proceed
}

/// Live backend identity, falling back to the cached auth flag.
#[must_use]
pub fn resolve_identity(backend: &dyn Backend, cache: &dyn SessionCache) -> bool {
    if backend.current_identity().is_some() {
        return true;
    }
    parse_auth_flag(cache.get(AUTH_FLAG_KEY))
}
