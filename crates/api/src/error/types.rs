//! Error type definitions for cipher operations

use std::borrow::Cow;
use std::io;

/// Primary error type for cipher operations
///
/// Every variant carries the sizes or names that explain the failure, so a
/// stored error can be replayed verbatim on later calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key length unsupported by the algorithm
    #[error("invalid key size for {algorithm}: {actual} bytes")]
    KeySize {
        algorithm: &'static str,
        actual: usize,
    },

    /// Nonce or IV length wrong for the mode/algorithm
    #[error("invalid nonce size for {context}: expected {expected} bytes, got {actual}")]
    InvalidNonceSize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Mode requested that the algorithm does not support
    #[error("{algorithm} does not support {mode} mode")]
    UnsupportedMode {
        algorithm: &'static str,
        mode: &'static str,
    },

    /// Invalid length error with context
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Padding did not follow the scheme's law
    #[error("invalid {scheme} padding")]
    InvalidPadding { scheme: &'static str },

    /// Authentication tag mismatch
    #[error("authentication failed for {context}")]
    AuthenticationFailed { context: &'static str },

    /// Invalid parameter error
    #[error("invalid parameter '{context}': {message}")]
    InvalidParameter {
        context: Cow<'static, str>,
        message: Cow<'static, str>,
    },

    /// Primitive construction or transform failure while encrypting
    #[error("encryption failed: {0}")]
    Encrypt(#[source] Box<Error>),

    /// Primitive construction or transform failure while decrypting
    #[error("decryption failed: {0}")]
    Decrypt(#[source] Box<Error>),

    /// The underlying source failed
    #[error("read failed ({kind:?}): {message}")]
    Read { kind: io::ErrorKind, message: String },

    /// The underlying sink failed
    #[error("write failed ({kind:?}): {message}")]
    Write { kind: io::ErrorKind, message: String },

    /// Caller buffer too small for the available plaintext
    ///
    /// `copied` bytes were delivered; `remaining` are still buffered.
    #[error("output buffer too small: copied {copied} bytes, {remaining} remaining")]
    Buffer { copied: usize, remaining: usize },

    /// Operation on a stream that was already closed
    #[error("stream is closed")]
    Closed,

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param<N, M>(context: N, message: M) -> Self
    where
        N: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Error::InvalidParameter {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Wrap as an encryption failure; already-wrapped errors pass through
    pub fn encrypt(err: Error) -> Self {
        match err {
            Error::Encrypt(_) => err,
            other => Error::Encrypt(Box::new(other)),
        }
    }

    /// Wrap as a decryption failure; already-wrapped errors pass through
    pub fn decrypt(err: Error) -> Self {
        match err {
            Error::Decrypt(_) => err,
            other => Error::Decrypt(Box::new(other)),
        }
    }

    /// Capture a source failure
    pub fn read(err: &io::Error) -> Self {
        Error::Read {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Capture a sink failure
    pub fn write(err: &io::Error) -> Self {
        Error::Write {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// The innermost cause, looking through Encrypt/Decrypt wrappers
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Encrypt(inner) | Error::Decrypt(inner) => inner.root_cause(),
            other => other,
        }
    }

    /// Whether the error is a configuration failure that no retry can fix
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::KeySize { .. } | Error::InvalidNonceSize { .. } | Error::UnsupportedMode { .. }
        )
    }

    /// Whether the root cause is an authentication tag mismatch
    pub fn is_authentication(&self) -> bool {
        matches!(self.root_cause(), Error::AuthenticationFailed { .. })
    }
}
