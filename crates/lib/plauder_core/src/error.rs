//! Chat submission errors.

use std::fmt;

use thiserror::Error;

/// Errors that can end a submission cycle.
///
/// All variants collapse to the same fallback message in the transcript;
/// the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ChatError {
    pub fn kind(&self) -> ChatErrorKind {
        match self {
            ChatError::Network(_) => ChatErrorKind::Network,
            ChatError::HttpStatus(_) => ChatErrorKind::HttpStatus,
            ChatError::Decode(_) => ChatErrorKind::Decode,
        }
    }
}

/// Fieldless discriminant of [`ChatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    Network,
    HttpStatus,
    Decode,
}

impl ChatErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatErrorKind::Network => "network",
            ChatErrorKind::HttpStatus => "http_status",
            ChatErrorKind::Decode => "decode",
        }
    }
}

impl fmt::Display for ChatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
