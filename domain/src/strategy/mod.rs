//! Strategy domain
//!
//! - [`entities::Strategy`] - the six fixed prompt strategies
//! - [`entities::Phase`] - stages of a fan-out run
//! - [`value_objects::FanOutResult`] - the answers and their comparison

pub mod entities;
pub mod value_objects;
