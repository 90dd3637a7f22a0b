//! Single-prompt ask configuration from TOML (`[ask]` section)

use fanout_domain::{Model, PromptTemplate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAskConfig {
    pub model: String,
    pub system_prompt: String,
}

impl Default for FileAskConfig {
    fn default() -> Self {
        Self {
            model: Model::DEFAULT_ASK.to_string(),
            system_prompt: PromptTemplate::ask_system().to_string(),
        }
    }
}
