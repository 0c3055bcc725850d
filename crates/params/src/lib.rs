//! Constant values for symkit cryptographic operations

#![no_std]

pub mod utils;
