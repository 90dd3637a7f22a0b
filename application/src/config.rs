//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as which upstream model answers the prompts.

use fanout_domain::{Model, PromptTemplate};
use serde::{Deserialize, Serialize};

/// Application behavior configuration.
///
/// Controls which models the use cases talk to. Transport settings such as
/// the outbound timeout belong to the gateway adapter, not to this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Model answering the strategy prompts and the comparison prompt
    pub fanout_model: Model,
    /// Model answering single-prompt asks
    pub ask_model: Model,
    /// System prompt for single-prompt asks
    pub ask_system_prompt: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            fanout_model: Model::default(),
            ask_model: Model::default_ask(),
            ask_system_prompt: PromptTemplate::ask_system().to_string(),
        }
    }
}

impl BehaviorConfig {
    pub fn with_fanout_model(mut self, model: impl Into<Model>) -> Self {
        self.fanout_model = model.into();
        self
    }

    pub fn with_ask_model(mut self, model: impl Into<Model>) -> Self {
        self.ask_model = model.into();
        self
    }

    pub fn with_ask_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.ask_system_prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.fanout_model.as_str(), "openai/gpt-4o-mini");
        assert_eq!(config.ask_model.as_str(), "mistralai/mistral-7b-instruct");
        assert_eq!(config.ask_system_prompt, "You are a helpful assistant.");
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = BehaviorConfig::default()
            .with_fanout_model("anthropic/claude-3.5-sonnet")
            .with_ask_model("openai/gpt-4o")
            .with_ask_system_prompt("Be terse.");

        assert_eq!(config.fanout_model.as_str(), "anthropic/claude-3.5-sonnet");
        assert_eq!(config.ask_model.as_str(), "openai/gpt-4o");
        assert_eq!(config.ask_system_prompt, "Be terse.");
    }
}
