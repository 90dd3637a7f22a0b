//! OpenRouter LLM Gateway implementation

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::{ConfigError, FileUpstreamConfig};
use async_trait::async_trait;
use fanout_application::ports::llm_gateway::{GatewayError, LlmGateway};
use fanout_domain::{Message, Model};
use std::time::Duration;
use tracing::{debug, info};

/// Upper bound on how much of an error body is kept in `GatewayError`
const MAX_ERROR_BODY_CHARS: usize = 500;

/// LLM Gateway implementation for an OpenAI-compatible chat-completion API
///
/// Every call is a single `POST` with a bearer token. There are no retries;
/// any transport, status or payload problem is returned as a `GatewayError`.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    completions_url: String,
    api_key: String,
}

impl OpenRouterGateway {
    /// Build a gateway from the `[upstream]` config section.
    ///
    /// Fails with [`ConfigError::MissingCredential`] when no API key can be
    /// resolved, so callers can refuse to start before serving anything.
    pub fn from_config(config: &FileUpstreamConfig) -> Result<Self, ConfigError> {
        let api_key = config.resolve_api_key()?;
        let gateway = Self::new(
            config.completions_url(),
            api_key,
            config.request_timeout_secs.map(Duration::from_secs),
        )?;

        info!(
            "OpenRouterGateway initialized ({}, timeout: {:?})",
            gateway.completions_url, config.request_timeout_secs
        );
        Ok(gateway)
    }

    /// Create a gateway for an explicit endpoint URL and key
    pub fn new(
        completions_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            completions_url: completions_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: model.as_str(),
            messages,
        };

        debug!(
            "POST {} (model: {}, {} messages)",
            self.completions_url,
            model,
            messages.len()
        );

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        parsed.into_text().ok_or_else(|| {
            GatewayError::MalformedResponse("missing choices[0].message.content".to_string())
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}
