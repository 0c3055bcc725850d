//! Electronic Codebook (ECB) mode
//!
//! Each block is encrypted independently. Identical plaintext blocks give
//! identical ciphertext blocks, so ECB is only offered for compatibility.

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode over a borrowed block cipher
pub struct Ecb<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
}

impl<'a, B: BlockCipher + ?Sized> Ecb<'a, B> {
    /// Creates a new ECB mode instance
    pub fn new(cipher: &'a B) -> Self {
        Self { cipher }
    }

    /// Encrypts a block-aligned buffer
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("ECB plaintext", plaintext.len(), block_size)?;

        let mut out = plaintext.to_vec();
        for block in out.chunks_exact_mut(block_size) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(out)
    }

    /// Decrypts a block-aligned buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("ECB ciphertext", ciphertext.len(), block_size)?;

        let mut out = ciphertext.to_vec();
        for block in out.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(out)
    }
}
