//! Twofish block cipher (128-bit block, 128/192/256-bit keys)

use cipher::KeyInit;

use super::{decrypt_with, encrypt_with, BlockCipher};
use crate::error::{Error, Result};
use symkit_params::utils::symmetric::{TWOFISH_BLOCK_SIZE, TWOFISH_KEY_SIZES};

/// Twofish instance with an expanded key schedule
#[derive(Clone)]
pub struct Twofish {
    inner: ::twofish::Twofish,
}

impl Twofish {
    /// Creates a Twofish instance from a 16, 24 or 32-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        if !TWOFISH_KEY_SIZES.contains(&key.len()) {
            return Err(Error::param("Twofish key", "key must be 16, 24 or 32 bytes"));
        }
        let inner = ::twofish::Twofish::new_from_slice(key)
            .map_err(|_| Error::param("Twofish key", "key must be 16, 24 or 32 bytes"))?;
        Ok(Self { inner })
    }
}

impl BlockCipher for Twofish {
    fn block_size(&self) -> usize {
        TWOFISH_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with(&self.inner, block, "Twofish block")
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with(&self.inner, block, "Twofish block")
    }

    fn name(&self) -> &'static str {
        "Twofish"
    }
}
