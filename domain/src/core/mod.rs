//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - upstream model identifier
//! - [`query::Query`] - a validated query to fan out
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod query;
