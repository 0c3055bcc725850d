//! GHASH universal hash for GCM (NIST SP 800-38D, section 6.4)
//!
//! Field multiplication runs bit by bit with masks instead of branches, so
//! timing does not depend on the hashed data or the key.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

const GCM_BLOCK_SIZE: usize = 16;

/// Running GHASH state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GHash {
    /// Hash subkey H
    h: [u8; GCM_BLOCK_SIZE],
    /// Accumulator Y
    y: [u8; GCM_BLOCK_SIZE],
}

impl GHash {
    /// Creates a GHASH state keyed with `h`
    pub fn new(h: &[u8; GCM_BLOCK_SIZE]) -> Self {
        Self {
            h: *h,
            y: [0u8; GCM_BLOCK_SIZE],
        }
    }

    /// Absorbs `data`, zero-padding a trailing partial block
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        for chunk in data.chunks(GCM_BLOCK_SIZE) {
            self.update_block(chunk)?;
        }
        Ok(())
    }

    /// Absorbs one block of at most 16 bytes, zero-padded on the right
    pub fn update_block(&mut self, block: &[u8]) -> Result<()> {
        validate::max_length("GHASH block", block.len(), GCM_BLOCK_SIZE)?;

        for (y, b) in self.y.iter_mut().zip(block) {
            *y ^= *b;
        }
        self.y = Self::gf_multiply(&self.y, &self.h);
        Ok(())
    }

    /// Absorbs the final length block (lengths given in bytes)
    pub fn update_lengths(&mut self, aad_len: u64, cipher_len: u64) -> Result<()> {
        let mut length_block = [0u8; GCM_BLOCK_SIZE];
        BigEndian::write_u64(&mut length_block[..8], aad_len.wrapping_mul(8));
        BigEndian::write_u64(&mut length_block[8..], cipher_len.wrapping_mul(8));
        self.update_block(&length_block)
    }

    /// Current hash value
    pub fn finalize(&self) -> [u8; GCM_BLOCK_SIZE] {
        self.y
    }

    /// Multiplication in GF(2^128) with GCM's reflected bit order
    ///
    /// Bit 0 of the field element is the most significant bit of byte 0;
    /// the reduction polynomial x^128 + x^7 + x^2 + x + 1 appears as 0xE1.
    fn gf_multiply(x: &[u8; 16], y: &[u8; 16]) -> [u8; 16] {
        let mut z = [0u8; 16];
        let mut v = *y;

        for &byte in x {
            for bit in (0..8).rev() {
                let mask = 0u8.wrapping_sub((byte >> bit) & 1);
                for (zk, vk) in z.iter_mut().zip(&v) {
                    *zk ^= vk & mask;
                }

                let lsb_mask = 0u8.wrapping_sub(v[15] & 1);
                let mut carry = 0u8;
                for vk in v.iter_mut() {
                    let next = *vk & 1;
                    *vk = (*vk >> 1) | (carry << 7);
                    carry = next;
                }
                v[0] ^= 0xE1 & lsb_mask;
            }
        }

        z
    }
}

/// GHASH over `aad`, `ciphertext` and their bit lengths
pub fn process_ghash(
    h: &[u8; GCM_BLOCK_SIZE],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; GCM_BLOCK_SIZE]> {
    let mut ghash = GHash::new(h);
    ghash.update(aad)?;
    ghash.update(ciphertext)?;
    ghash.update_lengths(aad.len() as u64, ciphertext.len() as u64)?;
    Ok(ghash.finalize())
}
