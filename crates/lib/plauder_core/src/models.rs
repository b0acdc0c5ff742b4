//! Wire and transcript types.

use serde::{Deserialize, Serialize};

/// Request body sent to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub message: String,
}

impl OutgoingMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body returned by the chat endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingReply {
    pub reply: String,
}

/// Class every rendered transcript entry carries.
pub const MESSAGE_CLASS: &str = "message";

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "ai",
        }
    }

    /// CSS class applied next to `message` on the rendered element.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Ai => "ai-message",
        }
    }

    /// Full class list of a rendered entry: `message` plus the sender class.
    pub fn class_names(self) -> [&'static str; 2] {
        [MESSAGE_CLASS, self.css_class()]
    }
}

/// One entry of the append-only transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedMessage {
    pub text: String,
    pub sender: Sender,
}

impl DisplayedMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }
}
