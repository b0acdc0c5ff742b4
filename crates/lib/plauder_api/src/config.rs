//! API server configuration.

use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Configuration for the chat server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// API key for the completion provider.
    pub api_key: String,
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix.
    pub api_base: String,
    /// Model name passed to the completion provider.
    pub model: String,
    /// System prompt prepended to every conversation. Empty disables it.
    pub system_prompt: String,
    /// Directory served for every path other than `/chat` (page + wasm bundle).
    pub static_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.into(),
            model: DEFAULT_MODEL.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            static_dir: None,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable        | Default                        |
    /// |-----------------|--------------------------------|
    /// | `BIND_ADDR`     | `127.0.0.1:5000`               |
    /// | `API_KEY`       | empty                          |
    /// | `API_BASE`      | `https://api.openai.com/v1`    |
    /// | `MODEL`         | `gpt-4o-mini`                  |
    /// | `SYSTEM_PROMPT` | `You are a helpful assistant.` |
    /// | `STATIC_DIR`    | unset                          |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ApiConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            api_key: lookup("API_KEY").unwrap_or(defaults.api_key),
            api_base: lookup("API_BASE").unwrap_or(defaults.api_base),
            model: lookup("MODEL").unwrap_or(defaults.model),
            system_prompt: lookup("SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
            static_dir: lookup("STATIC_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_empty());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn lookup_values_override_defaults() {
        let vars: HashMap<&str, &str> = [
            ("API_KEY", "sk-test"),
            ("API_BASE", "http://localhost:11434/v1"),
            ("MODEL", "llama3"),
            ("SYSTEM_PROMPT", "Antworte auf Deutsch."),
            ("STATIC_DIR", "www"),
        ]
        .into_iter()
        .collect();

        let config = ApiConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_base, "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.system_prompt, "Antworte auf Deutsch.");
        assert_eq!(config.static_dir, Some(PathBuf::from("www")));
    }

    #[test]
    fn empty_static_dir_is_ignored() {
        let config = ApiConfig::from_lookup(|key| (key == "STATIC_DIR").then(String::new));
        assert!(config.static_dir.is_none());
    }
}
