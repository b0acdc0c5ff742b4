//! # plauder_api
//!
//! HTTP API library for Plauder: the `POST /chat` endpoint the widget talks
//! to, plus static hosting for the page and its WebAssembly bundle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::ApiConfig;
use crate::handlers::chat;
use crate::services::completion::ChatBackend;

/// Route of the chat endpoint; the widget resolves `chat` relative to the page.
pub const CHAT_ROUTE: &str = "/chat";

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Completion backend answering chat messages.
    pub backend: Arc<dyn ChatBackend>,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().route(CHAT_ROUTE, post(chat::chat_handler));

    // Everything else comes from the static directory, `/` maps to index.html.
    if let Some(dir) = &state.config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).with_state(state)
}
