//! Error handling for symmetric cryptographic operations
//!
//! Re-exports the API error system and adds the I/O conversions used by
//! the streaming adapters.

use std::io;

pub use symkit_api::error::{validate, Error, Result, ResultExt};

/// Conversions from `std::io` results into stream errors
pub trait IoResultExt<T> {
    /// Map a source failure to [`Error::Read`]
    fn map_read_err(self) -> Result<T>;

    /// Map a sink failure to [`Error::Write`]
    fn map_write_err(self) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn map_read_err(self) -> Result<T> {
        self.map_err(|e| Error::read(&e))
    }

    fn map_write_err(self) -> Result<T> {
        self.map_err(|e| Error::write(&e))
    }
}

