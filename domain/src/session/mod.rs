//! Chat session domain.
//!
//! - [`entities::Message`] - a single role-tagged message sent upstream

pub mod entities;
