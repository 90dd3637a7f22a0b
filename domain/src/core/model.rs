//! Model value object representing an upstream model identifier

use serde::{Deserialize, Serialize};

/// Upstream model identifier (Value Object)
///
/// Chat-completion routers accept free-form identifiers such as
/// `openai/gpt-4o-mini`, so the model is an opaque string rather than a
/// closed set of variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    /// Model used for the six strategy calls and the comparison call
    pub const DEFAULT_FANOUT: &'static str = "openai/gpt-4o-mini";

    /// Model used for single-prompt asks
    pub const DEFAULT_ASK: &'static str = "mistralai/mistral-7b-instruct";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Default model for single-prompt asks
    pub fn default_ask() -> Self {
        Self::new(Self::DEFAULT_ASK)
    }
}

impl Default for Model {
    /// Returns the default fan-out model
    fn default() -> Self {
        Self::new(Self::DEFAULT_FANOUT)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::new(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::new(s)
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Model(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "openai/gpt-4o-mini");
        assert_eq!(Model::default_ask().as_str(), "mistralai/mistral-7b-instruct");
    }

    #[test]
    fn test_model_serializes_as_plain_string() {
        let json = serde_json::to_string(&Model::new("anthropic/claude-3.5-sonnet")).unwrap();
        assert_eq!(json, "\"anthropic/claude-3.5-sonnet\"");
    }
}
