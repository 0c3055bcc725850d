//! Counter (CTR) mode with secure memory handling
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data.
//! The counter occupies the trailing `counter_size` bytes of the block and
//! is incremented big-endian, wrapping within that field. By default the
//! whole block is the counter (NIST SP 800-38A, Appendix B.1).

use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// Counter mode over a borrowed block cipher
///
/// The keystream position persists across calls, so data may be fed in
/// arbitrary pieces.
pub struct Ctr<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    counter_block: Zeroizing<Vec<u8>>,
    counter_size: usize,
    keystream: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<'a, B: BlockCipher + ?Sized> Ctr<'a, B> {
    /// Creates a CTR instance whose counter spans the whole block
    ///
    /// `initial_counter` must be exactly one block long.
    pub fn new(cipher: &'a B, initial_counter: &[u8]) -> Result<Self> {
        Self::with_counter_size(cipher, initial_counter, cipher.block_size())
    }

    /// Creates a CTR instance that increments only the last `counter_size` bytes
    pub fn with_counter_size(
        cipher: &'a B,
        initial_counter: &[u8],
        counter_size: usize,
    ) -> Result<Self> {
        let block_size = cipher.block_size();
        validate::length("CTR initial counter block", initial_counter.len(), block_size)?;
        validate::parameter(
            counter_size > 0 && counter_size <= block_size,
            "counter_size",
            "counter must fit inside one block",
        )?;

        Ok(Self {
            cipher,
            counter_block: Zeroizing::new(initial_counter.to_vec()),
            counter_size,
            keystream: Zeroizing::new(vec![0u8; block_size]),
            keystream_pos: block_size,
        })
    }

    /// Current counter block (the next one to be encrypted)
    pub fn counter_block(&self) -> &[u8] {
        &self.counter_block
    }

    fn refill(&mut self) -> Result<()> {
        self.keystream.copy_from_slice(&self.counter_block);
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.increment_counter();
        self.keystream_pos = 0;
        Ok(())
    }

    fn increment_counter(&mut self) {
        let start = self.counter_block.len() - self.counter_size;
        for byte in self.counter_block[start..].iter_mut().rev() {
            let (value, carry) = byte.overflowing_add(1);
            *byte = value;
            if !carry {
                break;
            }
        }
    }

    /// XOR the keystream into `data`, continuing from the previous call
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.keystream_pos == self.keystream.len() {
                self.refill()?;
            }
            *byte ^= self.keystream[self.keystream_pos];
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
