//! DES and Triple DES (EDE3)
//!
//! Both are legacy 64-bit block ciphers kept for interoperability with
//! existing ciphertexts. Key parity bits are ignored.

use cipher::KeyInit;

use super::{decrypt_with, encrypt_with, BlockCipher};
use crate::error::{validate, Error, Result};
use symkit_params::utils::symmetric::{DES_BLOCK_SIZE, DES_KEY_SIZE, TDES3_KEY_SIZE, TDES_BLOCK_SIZE};

/// Single DES
#[derive(Clone)]
pub struct Des {
    inner: ::des::Des,
}

impl Des {
    /// Creates a DES instance from an 8-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::length("DES key", key.len(), DES_KEY_SIZE)?;
        let inner = ::des::Des::new_from_slice(key).map_err(|_| Error::Length {
            context: "DES key",
            expected: DES_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Self { inner })
    }
}

impl BlockCipher for Des {
    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with(&self.inner, block, "DES block")
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with(&self.inner, block, "DES block")
    }

    fn name(&self) -> &'static str {
        "DES"
    }
}

/// Triple DES in EDE mode with three independent subkeys
///
/// Two-key (16-byte) keys are expanded to K1‖K2‖K1 by the caller.
#[derive(Clone)]
pub struct TripleDes {
    inner: ::des::TdesEde3,
}

impl TripleDes {
    /// Creates a 3DES instance from a 24-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::length("3DES key", key.len(), TDES3_KEY_SIZE)?;
        let inner = ::des::TdesEde3::new_from_slice(key).map_err(|_| Error::Length {
            context: "3DES key",
            expected: TDES3_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Self { inner })
    }
}

impl BlockCipher for TripleDes {
    fn block_size(&self) -> usize {
        TDES_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with(&self.inner, block, "3DES block")
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with(&self.inner, block, "3DES block")
    }

    fn name(&self) -> &'static str {
        "3DES"
    }
}
