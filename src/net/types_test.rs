use super::*;

// =============================================================
// Serde defaults
// =============================================================

#[test]
fn chat_record_missing_optional_fields_default() {
    let chat: ChatRecord =
        serde_json::from_str(r#"{"id":"c1","participants":["a@x.com","b@x.com"]}"#)
            .expect("chat should deserialize");
    assert_eq!(chat.id, "c1");
    assert!(chat.name.is_none());
    assert!(chat.messages.is_empty());
    assert_eq!(chat.participants, vec!["a@x.com", "b@x.com"]);
}

#[test]
fn user_record_missing_display_name_defaults() {
    let user: UserRecord = serde_json::from_str(r#"{"id":"u1","email":"a@x.com"}"#)
        .expect("user should deserialize");
    assert_eq!(user.email, "a@x.com");
    assert!(user.display_name.is_none());
}

#[test]
fn message_round_trips_through_json() {
    let message = Message {
        username: "a@x.com".to_owned(),
        text: "hello".to_owned(),
        timestamp: 1_700_000_000_000.0,
    };
    let raw = serde_json::to_string(&message).expect("message should serialize");
    let back: Message = serde_json::from_str(&raw).expect("message should deserialize");
    assert_eq!(back, message);
}

#[test]
fn new_chat_serializes_participants() {
    let chat = NewChat {
        name: Some("pair".to_owned()),
        participants: vec!["a@x.com".to_owned(), "b@x.com".to_owned()],
    };
    let raw = serde_json::to_string(&chat).expect("new chat should serialize");
    assert!(raw.contains("a@x.com"));
    assert!(raw.contains("pair"));
}
