//! Output Feedback (OFB) mode
//!
//! `O_i = E(O_{i-1})`, `O_0 = IV`; data is XORed with the output blocks.
//! Encryption and decryption are the same operation.

use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// OFB mode over a borrowed block cipher
///
/// Like [`Ctr`](super::Ctr) it keeps its keystream position between calls.
pub struct Ofb<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    register: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<'a, B: BlockCipher + ?Sized> Ofb<'a, B> {
    /// Creates an OFB instance; the IV must be one block long
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        validate::length("OFB initialization vector", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            register: Zeroizing::new(iv.to_vec()),
            keystream_pos: iv.len(),
        })
    }

    /// XOR the keystream into `data`, continuing from the previous call
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.keystream_pos == self.register.len() {
                self.cipher.encrypt_block(&mut self.register)?;
                self.keystream_pos = 0;
            }
            *byte ^= self.register[self.keystream_pos];
            self.keystream_pos += 1;
        }
        Ok(())
    }

    /// Encrypts or decrypts `input` into a new buffer
    pub fn process(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = input.to_vec();
        self.apply_keystream(&mut out)?;
        Ok(out)
    }
}
