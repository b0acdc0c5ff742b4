//! Request and response bodies of the chat endpoint.

use serde::{Deserialize, Serialize};

pub use plauder_core::models::IncomingReply as ChatResponse;

/// Body of `POST /chat`. `message` is optional so a missing field maps to
/// the same validation error as a blank one.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
