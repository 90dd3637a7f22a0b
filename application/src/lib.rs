//! Application layer for prompt-fanout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    response_cache::ResponseCache,
};
pub use use_cases::run_ask::{RunAskError, RunAskUseCase};
pub use use_cases::run_fanout::{RunFanOutError, RunFanOutUseCase};
