use super::*;

fn chat(name: Option<&str>, participants: &[&str]) -> ChatRecord {
    ChatRecord {
        id: "c1".to_owned(),
        name: name.map(str::to_owned),
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        messages: Vec::new(),
    }
}

// =============================================================
// chat_title
// =============================================================

#[test]
fn chat_title_prefers_the_chat_name() {
    let chat = chat(Some("weekend plans"), &["a@x.com", "b@x.com"]);
    assert_eq!(chat_title(&chat, "a@x.com"), "weekend plans");
}

#[test]
fn chat_title_ignores_blank_names() {
    let chat = chat(Some("   "), &["a@x.com", "b@x.com"]);
    assert_eq!(chat_title(&chat, "a@x.com"), "b@x.com");
}

#[test]
fn chat_title_lists_other_participants() {
    let chat = chat(None, &["a@x.com", "b@x.com", "c@x.com"]);
    assert_eq!(chat_title(&chat, "b@x.com"), "a@x.com, c@x.com");
}

#[test]
fn chat_title_handles_self_only_chats() {
    let chat = chat(None, &["a@x.com"]);
    assert_eq!(chat_title(&chat, "a@x.com"), "Just you");
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_falls_back_to_email() {
    let user = UserRecord {
        id: "u1".to_owned(),
        email: "a@x.com".to_owned(),
        display_name: None,
    };
    assert_eq!(display_name(&user), "a@x.com");

    let named = UserRecord { display_name: Some("Alice".to_owned()), ..user };
    assert_eq!(display_name(&named), "Alice");
}

// =============================================================
// pair_chat
// =============================================================

#[test]
fn pair_chat_is_unnamed_with_both_participants() {
    let chat = pair_chat("a@x.com", "b@x.com");
    assert!(chat.name.is_none());
    assert_eq!(chat.participants, vec!["a@x.com", "b@x.com"]);
}
