//! Validation utilities used at API boundaries

use super::types::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a key length against the sizes an algorithm accepts
#[inline(always)]
pub fn key_size(algorithm: &'static str, actual: usize, allowed: &[usize]) -> Result<()> {
    if !allowed.contains(&actual) {
        return Err(Error::KeySize { algorithm, actual });
    }
    Ok(())
}

/// Validate a nonce or IV length
#[inline(always)]
pub fn nonce_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidNonceSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
