//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use plauder_core::widget::trim_input;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};

/// Error message for a missing, blank, or unreadable `message`.
pub const NO_MESSAGE: &str = "Keine Nachricht erhalten";

/// `POST /chat` — answer one user message.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let message = match payload {
        Ok(Json(body)) => body.message,
        Err(rejection) => {
            debug!(%rejection, "rejected chat body");
            None
        }
    };
    let message = message
        .as_deref()
        .map(trim_input)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation(NO_MESSAGE.into()))?;

    let reply = state
        .backend
        .complete(&state.config.system_prompt, message)
        .await?;

    Ok(Json(ChatResponse { reply }))
}
