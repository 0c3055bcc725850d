//! Symmetric encryption engine for the symkit library
//!
//! This crate turns the block and stream primitives of `symkit-algorithms`
//! into one encryption API:
//!
//! - [`CipherConfig`] and [`Mode`] describe a transform
//! - [`Algorithm`] validates a config and builds the primitive
//! - [`engine`] runs whole-buffer encrypt/decrypt for every mode
//! - [`Cipher`] is the one-shot entity with lazily built primitive
//! - [`streaming`] adapts the same transforms to `std::io` sinks and sources
//!
//! ```
//! use symkit_symmetric::{Algorithm, Cipher, CipherConfig, Mode};
//!
//! let config = CipherConfig::new(Mode::Cbc, b"1234567890123456")
//!     .with_iv(b"12345678");
//! let mut cipher = Cipher::new(Algorithm::TripleDes, config);
//!
//! let ciphertext = cipher.encrypt(b"hello world").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"hello world");
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cipher;
pub mod config;
pub mod engine;
pub mod error;
pub mod streaming;

// Re-export main types for convenience
pub use algorithm::{Algorithm, BlockPrimitive, Primitive};
pub use cipher::Cipher;
pub use config::{CipherConfig, Mode};
pub use streaming::{
    decrypt_stream, encrypt_stream, DecryptReader, EncryptWriter, StreamingDecrypt,
    StreamingEncrypt,
};
pub use symkit_algorithms::PaddingScheme;

// Re-export the API error system instead of custom error types
pub use symkit_api::error::{validate, Error, Result, ResultExt};
