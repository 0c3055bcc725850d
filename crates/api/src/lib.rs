//! Public API types for the symkit library
//!
//! This crate provides the error taxonomy shared by every symkit crate,
//! along with small validation helpers used at API boundaries.

#![forbid(unsafe_code)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result, ResultExt};
