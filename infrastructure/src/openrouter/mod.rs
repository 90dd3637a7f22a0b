//! OpenRouter (OpenAI-compatible) chat-completion adapter.
//!
//! - [`gateway::OpenRouterGateway`] implements the `LlmGateway` port over HTTP
//! - [`protocol`] holds the request/response wire types

pub mod gateway;
pub mod protocol;
