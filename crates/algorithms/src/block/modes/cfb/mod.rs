//! Cipher Feedback (CFB) mode, full-block segments
//!
//! `C_i = E(C_{i-1}) XOR P_i` with `C_0 = IV`. Both directions use the
//! block cipher's encrypt operation. A short final block uses only as
//! many keystream bytes as it needs.

use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{validate, Result};
use symkit_internal::xor_in_place;

/// CFB mode over a borrowed block cipher
pub struct Cfb<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    iv: Vec<u8>,
}

impl<'a, B: BlockCipher + ?Sized> Cfb<'a, B> {
    /// Creates a CFB instance; the IV must be one block long
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        validate::length("CFB initialization vector", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    /// Encrypts data of any length
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        let mut register = Zeroizing::new(self.iv.clone());
        for segment in out.chunks_mut(self.cipher.block_size()) {
            self.cipher.encrypt_block(&mut register)?;
            xor_in_place(segment, &register);
            // feedback is the ciphertext just produced
            register[..segment.len()].copy_from_slice(segment);
        }
        Ok(out)
    }

    /// Decrypts data of any length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        let mut out = Zeroizing::new(ciphertext.to_vec());
        let mut register = Zeroizing::new(self.iv.clone());
        for (segment, current) in out
            .chunks_mut(block_size)
            .zip(ciphertext.chunks(block_size))
        {
            self.cipher.encrypt_block(&mut register)?;
            xor_in_place(segment, &register);
            register[..current.len()].copy_from_slice(current);
        }
        Ok(std::mem::take(&mut *out))
    }
}
