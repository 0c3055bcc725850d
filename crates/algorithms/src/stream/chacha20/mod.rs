//! ChaCha20 stream cipher (RFC 8439)
//!
//! 256-bit key, 96-bit nonce and a 32-bit block counter. Backed by the
//! RustCrypto `chacha20` crate.

use cipher::{KeyIvInit, StreamCipher as _, StreamCipherSeek};

use super::StreamCipher;
use crate::error::{validate, Error, Result};
pub use symkit_params::utils::symmetric::{
    CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE,
};

/// ChaCha20 keystream generator
pub struct ChaCha20 {
    inner: ::chacha20::ChaCha20,
}

impl ChaCha20 {
    /// Creates a ChaCha20 instance starting at block counter 0
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        validate::length("ChaCha20 key", key.len(), CHACHA20_KEY_SIZE)?;
        validate::length("ChaCha20 nonce", nonce.len(), CHACHA20_NONCE_SIZE)?;

        let inner = ::chacha20::ChaCha20::new_from_slices(key, nonce)
            .map_err(|_| Error::param("ChaCha20", "invalid key or nonce length"))?;
        Ok(Self { inner })
    }

    /// Creates a ChaCha20 instance starting at the given block counter
    pub fn with_counter(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self> {
        let mut cipher = Self::new(key, nonce)?;
        cipher.seek(u64::from(counter) * CHACHA20_BLOCK_SIZE as u64)?;
        Ok(cipher)
    }

    /// Current byte offset in the keystream
    pub fn position(&self) -> u64 {
        self.inner.current_pos()
    }
}

impl StreamCipher for ChaCha20 {
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner
            .try_apply_keystream(data)
            .map_err(|_| Error::Processing {
                operation: "ChaCha20",
                details: "keystream exhausted",
            })
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        self.inner.try_seek(position).map_err(|_| Error::Processing {
            operation: "ChaCha20",
            details: "seek beyond keystream end",
        })
    }

    fn name(&self) -> &'static str {
        "ChaCha20"
    }
}
