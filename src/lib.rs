//! # symkit
//!
//! A symmetric-cipher toolkit: DES/3DES, Twofish, AES and ChaCha20 behind
//! one engine of block modes, padding schemes and streaming adapters.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! symkit = "0.3"
//! ```
//!
//! ## Features
//!
//! - `traditional` (default): the algorithm and engine crates
//! - `serde`: (de)serialization of modes, algorithms and padding schemes
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`symkit-api`]: error taxonomy and validation helpers
//! - [`symkit-params`]: key, block and nonce sizes
//! - [`symkit-algorithms`]: primitives, raw modes, GCM and padding
//! - [`symkit-symmetric`]: configuration, engine and streaming adapters
//!
//! ## Example
//!
//! ```
//! use symkit::prelude::*;
//!
//! let config = CipherConfig::new(Mode::Gcm, &[0x42; 16])
//!     .with_iv(&[0x24; 12])
//!     .with_aad(b"header");
//!
//! let mut sink = EncryptWriter::new(Vec::new(), Algorithm::Aes, config.clone());
//! sink.write(b"hello world")?;
//! let ciphertext = sink.finalize()?;
//!
//! let mut reader = DecryptReader::new(&ciphertext[..], Algorithm::Aes, config);
//! let mut plaintext = [0u8; 11];
//! assert_eq!(reader.read(&mut plaintext)?, 11);
//! assert_eq!(&plaintext, b"hello world");
//! # Ok::<(), symkit::api::Error>(())
//! ```

// Core re-exports (always available)
pub use symkit_api as api;
pub use symkit_internal as internal;
pub use symkit_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use symkit_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use symkit_symmetric as symmetric;

/// Common imports for symkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export capability traits and the padding codec
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{BlockCipher, PaddingScheme, StreamCipher};

    // Re-export the engine surface
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        decrypt_stream, encrypt_stream, Algorithm, Cipher, CipherConfig, DecryptReader,
        EncryptWriter, Mode, StreamingDecrypt, StreamingEncrypt,
    };
}
