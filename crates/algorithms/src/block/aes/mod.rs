//! AES block cipher with 128, 192 or 256-bit keys

use cipher::KeyInit;

use super::{decrypt_with, encrypt_with, BlockCipher};
use crate::error::{Error, Result};
use symkit_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

#[derive(Clone)]
enum Schedule {
    Aes128(::aes::Aes128),
    Aes192(::aes::Aes192),
    Aes256(::aes::Aes256),
}

/// AES with the key size picked from the key length
#[derive(Clone)]
pub struct Aes {
    schedule: Schedule,
}

impl Aes {
    /// Creates an AES instance from a 16, 24 or 32-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        let bad_key = || Error::param("AES key", "key must be 16, 24 or 32 bytes");
        let schedule = match key.len() {
            AES128_KEY_SIZE => {
                Schedule::Aes128(::aes::Aes128::new_from_slice(key).map_err(|_| bad_key())?)
            }
            AES192_KEY_SIZE => {
                Schedule::Aes192(::aes::Aes192::new_from_slice(key).map_err(|_| bad_key())?)
            }
            AES256_KEY_SIZE => {
                Schedule::Aes256(::aes::Aes256::new_from_slice(key).map_err(|_| bad_key())?)
            }
            _ => return Err(bad_key()),
        };
        Ok(Self { schedule })
    }

    /// Key size in bytes
    pub fn key_size(&self) -> usize {
        match self.schedule {
            Schedule::Aes128(_) => AES128_KEY_SIZE,
            Schedule::Aes192(_) => AES192_KEY_SIZE,
            Schedule::Aes256(_) => AES256_KEY_SIZE,
        }
    }
}

impl BlockCipher for Aes {
    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match &self.schedule {
            Schedule::Aes128(c) => encrypt_with(c, block, "AES block"),
            Schedule::Aes192(c) => encrypt_with(c, block, "AES block"),
            Schedule::Aes256(c) => encrypt_with(c, block, "AES block"),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match &self.schedule {
            Schedule::Aes128(c) => decrypt_with(c, block, "AES block"),
            Schedule::Aes192(c) => decrypt_with(c, block, "AES block"),
            Schedule::Aes256(c) => decrypt_with(c, block, "AES block"),
        }
    }

    fn name(&self) -> &'static str {
        "AES"
    }
}
