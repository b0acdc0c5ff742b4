//! Completion backends — turn a user message into an assistant reply.
//!
//! [`OpenAiBackend`] calls any OpenAI-compatible `/chat/completions` API
//! (OpenAI, Ollama, vLLM, ...). A single request, no retry.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::AppError;

/// Produces one reply for one user message.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError>;
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionChoiceMessage {
    content: Option<String>,
}

/// Builds the message list: optional system prompt, then the user message.
fn build_messages<'a>(system_prompt: &'a str, user_prompt: &'a str) -> Vec<CompletionMessage<'a>> {
    let mut messages = Vec::with_capacity(2);
    if !system_prompt.is_empty() {
        messages.push(CompletionMessage {
            role: "system",
            content: system_prompt,
        });
    }
    messages.push(CompletionMessage {
        role: "user",
        content: user_prompt,
    });
    messages
}

/// OpenAI-compatible chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.api_base, &config.api_key, &config.model)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError> {
        let url = self.completions_url();
        debug!(%url, model = %self.model, "requesting chat completion");

        let mut request = self.client.post(&url).json(&CompletionRequest {
            model: &self.model,
            messages: build_messages(system_prompt, user_prompt),
        });
        if !self.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let resp = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Completion request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(AppError::Upstream(format!(
                "Completion request failed: {status} {body}"
            )));
        }

        let data: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Completion response parse error: {e}")))?;

        data.choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream("Completion returned no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| AppError::Upstream("Completion returned no content".to_string()))
    }
}
