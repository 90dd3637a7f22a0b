//! Progress reporting for the CLI

pub mod reporter;
