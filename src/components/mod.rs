//! Reusable presentational components.

pub mod chat_card;
pub mod message_bubble;
