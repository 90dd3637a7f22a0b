//! Run Ask use case
//!
//! Sends one prompt, preceded by a system prompt, and returns the answer.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use fanout_domain::{Message, Model};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a single-prompt ask
#[derive(Error, Debug)]
pub enum RunAskError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Use case for a single chat completion
pub struct RunAskUseCase<G: LlmGateway> {
    gateway: Arc<G>,
    model: Model,
    system_prompt: String,
}

impl<G: LlmGateway> RunAskUseCase<G> {
    pub fn new(gateway: Arc<G>, config: &BehaviorConfig) -> Self {
        Self {
            gateway,
            model: config.ask_model.clone(),
            system_prompt: config.ask_system_prompt.clone(),
        }
    }

    pub async fn execute(&self, prompt: &str) -> Result<String, RunAskError> {
        if prompt.is_empty() {
            return Err(RunAskError::EmptyPrompt);
        }

        info!("Asking {}", self.model);

        let messages = [
            Message::system(self.system_prompt.as_str()),
            Message::user(prompt),
        ];
        Ok(self.gateway.complete(&self.model, &messages).await?)
    }
}
