//! Transport seam between the widget and the chat endpoint.
//!
//! [`HttpTransport`] POSTs JSON with `reqwest`, which compiles to `fetch` on
//! `wasm32` and to hyper everywhere else. The same code path serves the
//! browser binding and the terminal client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::ChatError;
use crate::models::{IncomingReply, OutgoingMessage};

/// Endpoint path, relative to the hosting page.
pub const DEFAULT_ENDPOINT: &str = "chat";

/// Sends one message and waits for its reply.
///
/// Futures are not required to be `Send`: the browser runs everything on a
/// single thread and `fetch` futures are `!Send`.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, message: &OutgoingMessage) -> Result<IncomingReply, ChatError>;
}

/// Resolves `endpoint` against the URL of the hosting page.
///
/// A relative endpoint such as `chat` replaces the last path segment of
/// `base`; an absolute URL is returned unchanged.
pub fn resolve_endpoint(base: &str, endpoint: &str) -> Result<Url, url::ParseError> {
    Url::parse(base)?.join(endpoint)
}

/// JSON-over-HTTP transport. No timeout and no retry.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &OutgoingMessage) -> Result<IncomingReply, ChatError> {
        debug!(endpoint = %self.endpoint, "sending chat message");

        // `.json()` sets `Content-Type: application/json`.
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::HttpStatus(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ChatError::Decode(e.to_string()))
    }
}
