//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Each collection gets an explicit record type with named fields instead of
//! an open map, so missing document fields surface as serde defaults rather
//! than runtime lookups.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user directory entry as stored in the `users` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend-assigned document id.
    pub id: String,
    /// Account email; doubles as the username everywhere in this app.
    pub email: String,
    /// Optional display name; falls back to the email in the UI.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A single chat message. Append-only once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Author username (email).
    pub username: String,
    /// Message body.
    pub text: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// A chat document from the `chats` collection.
///
/// `participants` is order-preserving as stored; membership queries on the
/// backend are order-insensitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Backend-assigned document id.
    pub id: String,
    /// Optional chat title.
    #[serde(default)]
    pub name: Option<String>,
    /// Usernames (emails) of the members.
    pub participants: Vec<String>,
    /// Stored message history, oldest first.
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Payload for creating a chat; the backend assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewChat {
    #[serde(default)]
    pub name: Option<String>,
    pub participants: Vec<String>,
}
