//! Error handling for the symkit ecosystem

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Re-export validation utilities module
pub use validate as validation;

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;

        let kind = match &err {
            Error::Read { kind, .. } | Error::Write { kind, .. } => *kind,
            Error::Closed => ErrorKind::BrokenPipe,
            Error::Buffer { .. } => ErrorKind::WriteZero,
            Error::InvalidLength { .. }
            | Error::InvalidPadding { .. }
            | Error::AuthenticationFailed { .. } => ErrorKind::InvalidData,
            Error::Encrypt(inner) | Error::Decrypt(inner) => match inner.as_ref() {
                Error::Read { kind, .. } | Error::Write { kind, .. } => *kind,
                _ => ErrorKind::InvalidData,
            },
            _ => ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}
