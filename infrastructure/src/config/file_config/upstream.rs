//! Upstream endpoint configuration from TOML (`[upstream]` section)

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Chat-completion endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUpstreamConfig {
    /// Base URL; `/chat/completions` is appended for each request.
    pub base_url: String,
    /// Model answering the strategy and comparison prompts.
    pub model: String,
    /// Environment variable name for the API key (default: "OPENROUTER_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Per-request timeout in seconds. Unset means no timeout.
    pub request_timeout_secs: Option<u64>,
}

impl Default for FileUpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: fanout_domain::Model::DEFAULT_FANOUT.to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl FileUpstreamConfig {
    /// Resolve the bearer credential: explicit `api_key` first, then the
    /// environment variable named by `api_key_env`.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.to_string());
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::MissingCredential {
                var: self.api_key_env.clone(),
            }),
        }
    }

    /// Full URL of the chat-completion endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
