//! LLM Gateway port
//!
//! Defines the interface for communicating with the upstream chat-completion
//! endpoint.

use async_trait::async_trait;
use fanout_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Upstream returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the upstream model.
/// Implementations (adapters) live in the infrastructure layer. Each call is
/// a single stateless completion; no conversation state is kept between calls.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send role-tagged messages and return the generated text
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError>;

    /// Send a single user message and return the generated text
    async fn complete_prompt(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        self.complete(model, &[Message::user(prompt)]).await
    }
}
