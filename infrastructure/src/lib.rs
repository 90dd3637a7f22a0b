//! Infrastructure layer for prompt-fanout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod openrouter;

// Re-export commonly used types
pub use cache::InMemoryResponseCache;
pub use config::{
    ConfigError, ConfigLoader, FileAskConfig, FileConfig, FileOutputConfig, FileServerConfig,
    FileUpstreamConfig,
};
pub use openrouter::gateway::OpenRouterGateway;
