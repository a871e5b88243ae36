use chrono::Local;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Author;

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub enum MessageType {
    #[default]
    Normal,
    Error,
}

/// One transcript entry. Immutable after creation; the transcript is
/// append-only for the lifetime of a session.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
pub struct Message {
    /// Client-side identifier. Outgoing user messages are tagged with it so
    /// the matching reply can be placed under its request even when replies
    /// arrive out of request order.
    pub id: String,
    pub author: Author,
    pub text: String,
    pub message_type: MessageType,
    pub escalated: bool,
    pub timestamp: String,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        let prefix = match author {
            Author::User => "u",
            Author::Assistant => "a",
        };
        Message {
            id: format!("{prefix}_{}", Uuid::new_v4()),
            author,
            text: text.to_string().replace('\t', "  "),
            message_type: MessageType::Normal,
            escalated: false,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn new_with_type(author: Author, message_type: MessageType, text: &str) -> Message {
        Message {
            message_type,
            ..Message::new(author, text)
        }
    }

    pub fn with_escalation(mut self, escalated: bool) -> Message {
        self.escalated = escalated;
        self
    }

    pub fn is_error(&self) -> bool {
        self.message_type == MessageType::Error
    }
}
