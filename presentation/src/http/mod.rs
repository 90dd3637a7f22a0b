//! HTTP API
//!
//! - [`routes`] - `POST /run-prompts`, the fan-out endpoint
//! - [`demo`] - stateless demo routes (`/`, `/greet`, `/create-user`)
//! - [`error`] - mapping of use case errors to HTTP responses
//! - [`server`] - router assembly and the listener loop

pub mod demo;
pub mod error;
pub mod routes;
pub mod server;
