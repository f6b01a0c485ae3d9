use super::*;

// =============================================================
// Draft validation
// =============================================================

#[test]
fn validate_draft_trims_the_body() {
    assert_eq!(validate_draft("  hello  "), Some("hello".to_owned()));
}

#[test]
fn validate_draft_rejects_blank_input() {
    assert_eq!(validate_draft(""), None);
    assert_eq!(validate_draft("   "), None);
}

// =============================================================
// Outgoing messages
// =============================================================

#[test]
fn outgoing_message_carries_author_and_timestamp() {
    let message = outgoing_message("a@x.com", "hello", 1_700_000_000_000.0);
    assert_eq!(message.username, "a@x.com");
    assert_eq!(message.text, "hello");
    assert!((message.timestamp - 1_700_000_000_000.0).abs() < f64::EPSILON);
}
