//! Domain layer for prompt-fanout
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Fan-Out
//!
//! A single [`Query`] is rendered into six fixed prompt [`Strategy`] templates.
//! Each rendered prompt is answered independently by the same upstream model,
//! and a final comparison prompt asks the model to rate the six answers.
//!
//! ## Results
//!
//! - [`StrategyResults`]: the six answers keyed by strategy
//! - [`FanOutResult`]: the answers plus the comparative analysis

pub mod config;
pub mod core;
pub mod prompt;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, query::Query};
pub use prompt::PromptTemplate;
pub use session::entities::{Message, Role};
pub use strategy::{
    entities::{Phase, Strategy},
    value_objects::{FanOutResult, StrategyResults},
};
