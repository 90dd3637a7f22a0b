//! Configuration file loading for prompt-fanout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `FANOUT_<SECTION>__<KEY>` (e.g. `FANOUT_UPSTREAM__MODEL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./fanout.toml` or `./.fanout.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/prompt-fanout/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileAskConfig, FileConfig, FileOutputConfig, FileServerConfig, FileUpstreamConfig,
};
pub use loader::ConfigLoader;
