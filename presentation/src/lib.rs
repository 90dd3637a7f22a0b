//! Presentation layer for prompt-fanout
//!
//! This crate contains CLI definitions, the HTTP server, output formatters
//! and progress reporters.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormatArg};
pub use http::server::{router, serve};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
