//! Cipher primitives, modes of operation and padding schemes
//!
//! This crate holds the low-level half of symkit:
//!
//! - [`block`]: the [`BlockCipher`] capability, DES/3DES, Twofish and AES
//!   primitives, and the raw ECB, CBC, CTR, CFB and OFB modes
//! - [`aead`]: GCM with its GHASH universal hash
//! - [`stream`]: the [`StreamCipher`] capability and ChaCha20
//! - [`padding`]: the [`PaddingScheme`] codec
//!
//! Modes here operate on whole, already-padded buffers; padding and
//! configuration are composed one level up in `symkit-symmetric`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes, BlockCipher, Cbc, Cfb, Ctr, Des, Ecb, Ofb, TripleDes, Twofish};

// AEAD modes
pub mod aead;
pub use aead::Gcm;

// Stream cipher implementations
pub mod stream;
pub use stream::{ChaCha20, StreamCipher};

// Padding codec
pub mod padding;
pub use padding::PaddingScheme;
