//! Error handling traits for the symkit ecosystem

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Wrap any error as [`Error::Encrypt`]
    fn wrap_encrypt(self) -> Result<T>;

    /// Wrap any error as [`Error::Decrypt`]
    fn wrap_decrypt(self) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn wrap_encrypt(self) -> Result<T> {
        self.map_err(|e| Error::encrypt(e.into()))
    }

    fn wrap_decrypt(self) -> Result<T> {
        self.map_err(|e| Error::decrypt(e.into()))
    }
}
