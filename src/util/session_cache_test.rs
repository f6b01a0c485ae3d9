use super::*;

// =============================================================
// Auth flag parsing
// =============================================================

#[test]
fn parse_auth_flag_accepts_json_true() {
    assert!(parse_auth_flag(Some("true".to_owned())));
}

#[test]
fn parse_auth_flag_rejects_false_and_garbage() {
    assert!(!parse_auth_flag(Some("false".to_owned())));
    assert!(!parse_auth_flag(Some("yes".to_owned())));
    assert!(!parse_auth_flag(Some(String::new())));
}

#[test]
fn parse_auth_flag_rejects_missing_key() {
    assert!(!parse_auth_flag(None));
}

// =============================================================
// Browser cache on native builds
// =============================================================

#[test]
fn browser_cache_noops_without_a_window() {
    let cache = BrowserSessionCache;
    cache.set(AUTH_FLAG_KEY, "true");
    assert!(cache.get(AUTH_FLAG_KEY).is_none());
    cache.remove(AUTH_FLAG_KEY);
}

#[test]
fn cache_keys_match_the_stored_schema() {
    assert_eq!(AUTH_FLAG_KEY, "isAuthenticated");
    assert_eq!(USERNAME_KEY, "username");
}
