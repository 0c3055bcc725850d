//! Galois/Counter Mode (GCM) for authenticated encryption
//!
//! GCM combines counter-mode encryption with the GHASH universal hash.
//! The output of [`Gcm::encrypt`] is `ciphertext || tag`; [`Gcm::decrypt`]
//! verifies the tag in constant time before releasing any plaintext.
//!
//! Follows NIST SP 800-38D: a 96-bit nonce is used directly as
//! `J0 = nonce || 0^31 || 1`; any other length is hashed into J0.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroizing;

use crate::block::{BlockCipher, Ctr};
use crate::error::{validate, Result};
use symkit_internal::{ct_eq, xor_in_place};
use symkit_params::utils::symmetric::{
    GCM_BLOCK_SIZE, GCM_MIN_TAG_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE,
};

pub mod ghash;
use ghash::{process_ghash, GHash};

/// GCM mode over a borrowed 128-bit block cipher
pub struct Gcm<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    h: Zeroizing<[u8; GCM_BLOCK_SIZE]>,
    j0: [u8; GCM_BLOCK_SIZE],
    tag_len: usize,
}

impl<'a, B: BlockCipher + ?Sized> Gcm<'a, B> {
    /// Creates a GCM instance with the default 16-byte tag
    pub fn new(cipher: &'a B, nonce: &[u8]) -> Result<Self> {
        Self::new_with_tag_len(cipher, nonce, GCM_TAG_SIZE)
    }

    /// Creates a GCM instance with a truncated tag of `tag_len` bytes (12..=16)
    pub fn new_with_tag_len(cipher: &'a B, nonce: &[u8], tag_len: usize) -> Result<Self> {
        validate::parameter(
            cipher.block_size() == GCM_BLOCK_SIZE,
            "block cipher",
            "GCM requires a 128-bit block cipher",
        )?;
        validate::parameter(!nonce.is_empty(), "nonce", "GCM nonce must not be empty")?;
        validate::parameter(
            (GCM_MIN_TAG_SIZE..=GCM_TAG_SIZE).contains(&tag_len),
            "tag_len",
            "GCM tag length must be between 12 and 16 bytes",
        )?;

        // Hash subkey H = E(0^128)
        let mut h = Zeroizing::new([0u8; GCM_BLOCK_SIZE]);
        cipher.encrypt_block(&mut h[..])?;

        let j0 = if nonce.len() == GCM_NONCE_SIZE {
            let mut j0 = [0u8; GCM_BLOCK_SIZE];
            j0[..GCM_NONCE_SIZE].copy_from_slice(nonce);
            j0[GCM_BLOCK_SIZE - 1] = 1;
            j0
        } else {
            let mut g = GHash::new(&h);
            g.update(nonce)?;
            g.update_lengths(0, nonce.len() as u64)?;
            g.finalize()
        };

        Ok(Self {
            cipher,
            h,
            j0,
            tag_len,
        })
    }

    /// Tag length in bytes
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Keystream generator starting at inc32(J0)
    fn keystream(&self) -> Result<Ctr<'a, B>> {
        let mut counter = self.j0;
        let low = BigEndian::read_u32(&counter[12..]).wrapping_add(1);
        BigEndian::write_u32(&mut counter[12..], low);
        Ctr::with_counter_size(self.cipher, &counter, 4)
    }

    fn compute_tag(&self, aad: &[u8], ciphertext: &[u8]) -> Result<[u8; GCM_TAG_SIZE]> {
        let mut tag = process_ghash(&self.h, aad, ciphertext)?;
        let mut mask = self.j0;
        self.cipher.encrypt_block(&mut mask)?;
        xor_in_place(&mut tag, &mask);
        Ok(tag)
    }

    /// Encrypts `plaintext` and appends the authentication tag
    pub fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let aad = aad.unwrap_or(&[]);

        let mut out = Vec::with_capacity(plaintext.len() + self.tag_len);
        out.extend_from_slice(plaintext);
        self.keystream()?.apply_keystream(&mut out)?;

        let tag = self.compute_tag(aad, &out)?;
        out.extend_from_slice(&tag[..self.tag_len]);
        Ok(out)
    }

    /// Verifies the tag and decrypts `ciphertext || tag`
    pub fn decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::min_length("GCM ciphertext", ciphertext.len(), self.tag_len)?;
        let aad = aad.unwrap_or(&[]);
        let (data, received_tag) = ciphertext.split_at(ciphertext.len() - self.tag_len);

        let expected = self.compute_tag(aad, data)?;
        validate::authentication(ct_eq(&expected[..self.tag_len], received_tag), "GCM")?;

        let mut out = data.to_vec();
        self.keystream()?.apply_keystream(&mut out)?;
        Ok(out)
    }
}
