//! Application layer: error wrapping above the domain
//!
//! Configuration loading lives in [`crate::config`] and reports through these errors.

pub mod error;

pub use error::{ApplicationError, ApplicationResult};
