//! Internal utilities for the symkit library
//!
//! Not part of the public API; helpers here may change between releases.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, xor_in_place};
