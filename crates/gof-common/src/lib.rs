//! Goodness-of-fit common types and errors.
//!
//! This crate provides foundational types shared across the gof crates:
//! - The unified error type and its stable error codes
//! - Report schema versioning

pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
