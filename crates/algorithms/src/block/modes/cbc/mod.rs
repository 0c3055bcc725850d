//! Cipher Block Chaining (CBC) mode implementation
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. Follows NIST SP 800-38A.

use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{validate, Result};
use symkit_internal::xor_in_place;

/// CBC mode over a borrowed block cipher
pub struct Cbc<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    iv: Vec<u8>,
}

impl<'a, B: BlockCipher + ?Sized> Cbc<'a, B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size; pad it first.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("CBC plaintext", plaintext.len(), block_size)?;

        let mut out = plaintext.to_vec();
        let mut prev = self.iv.clone();
        for block in out.chunks_exact_mut(block_size) {
            xor_in_place(block, &prev);
            self.cipher.encrypt_block(block)?;
            prev.copy_from_slice(block);
        }
        Ok(out)
    }

    /// Decrypts a message using CBC mode
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut out = Zeroizing::new(ciphertext.to_vec());
        let mut prev = self.iv.as_slice();
        for (block, current) in out
            .chunks_exact_mut(block_size)
            .zip(ciphertext.chunks_exact(block_size))
        {
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, prev);
            prev = current;
        }
        Ok(std::mem::take(&mut *out))
    }
}
