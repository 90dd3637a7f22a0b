//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod ask;
mod output;
mod server;
mod upstream;

pub use ask::FileAskConfig;
pub use output::FileOutputConfig;
pub use server::FileServerConfig;
pub use upstream::FileUpstreamConfig;

use crate::config::error::ConfigError;
use fanout_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Upstream chat-completion endpoint
    pub upstream: FileUpstreamConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Single-prompt ask settings
    pub ask: FileAskConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning the first problem found.
    ///
    /// The credential is not checked here; it is resolved when the gateway
    /// is built so that commands which never call upstream still work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.model.trim().is_empty() {
            return Err(invalid("upstream.model", "model name cannot be empty"));
        }
        if self.ask.model.trim().is_empty() {
            return Err(invalid("ask.model", "model name cannot be empty"));
        }
        if let Err(e) = reqwest::Url::parse(&self.upstream.base_url) {
            return Err(invalid(
                "upstream.base_url",
                format!("'{}': {}", self.upstream.base_url, e),
            ));
        }
        if self.upstream.request_timeout_secs == Some(0) {
            return Err(invalid(
                "upstream.request_timeout_secs",
                "timeout must be at least 1 second; omit it to disable",
            ));
        }
        self.server.parse_bind()?;
        Ok(())
    }

    /// Convert into the application-level behavior configuration
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::default()
            .with_fanout_model(self.upstream.model.as_str())
            .with_ask_model(self.ask.model.as_str())
            .with_ask_system_prompt(self.ask.system_prompt.as_str())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanout_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[upstream]
base_url = "http://localhost:9000/v1"
model = "anthropic/claude-3.5-sonnet"
api_key_env = "MY_KEY"
request_timeout_secs = 45

[server]
bind = "0.0.0.0:8080"

[ask]
model = "openai/gpt-4o"
system_prompt = "Be terse."

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.upstream.base_url, "http://localhost:9000/v1");
        assert_eq!(config.upstream.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(config.upstream.api_key_env, "MY_KEY");
        assert_eq!(config.upstream.request_timeout_secs, Some(45));
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.ask.system_prompt, "Be terse.");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[upstream]
model = "openai/gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.upstream.model, "openai/gpt-4o");
        // Defaults should apply
        assert_eq!(config.upstream.api_key_env, "OPENROUTER_API_KEY");
        assert_eq!(config.server.bind, "127.0.0.1:8000");
        assert!(config.upstream.request_timeout_secs.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.upstream.model = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = FileConfig::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = FileConfig::default();
        config.upstream.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());

        let mut config = FileConfig::default();
        config.server.bind = "nowhere".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "server.bind"
        ));
    }

    #[test]
    fn test_to_behavior_config() {
        let mut config = FileConfig::default();
        config.upstream.model = "openai/gpt-4o".to_string();
        config.ask.system_prompt = "Be terse.".to_string();

        let behavior = config.to_behavior_config();
        assert_eq!(behavior.fanout_model.as_str(), "openai/gpt-4o");
        assert_eq!(behavior.ask_model.as_str(), "mistralai/mistral-7b-instruct");
        assert_eq!(behavior.ask_system_prompt, "Be terse.");
    }
}
