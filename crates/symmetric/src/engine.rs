//! Whole-buffer encryption and decryption
//!
//! One `match` on [`Mode`] selects the mode of operation; padding is
//! applied for ECB and CBC only, and GCM reads the configured AAD. The
//! functions are generic over [`BlockCipher`], so any keyed block
//! permutation can be driven through them, not only the built-in ones.
//!
//! Empty input produces empty output in every mode except GCM, where the
//! tag still authenticates the AAD and an empty ciphertext is rejected.

use zeroize::Zeroizing;

use crate::algorithm::Primitive;
use crate::config::{CipherConfig, Mode};
use crate::error::{Result, ResultExt};
use symkit_algorithms::{BlockCipher, Cbc, Cfb, Ctr, Ecb, Gcm, Ofb, StreamCipher};

/// Encrypt `plaintext` with a block primitive
///
/// Failures are reported as [`Error::Encrypt`](crate::Error::Encrypt).
pub fn encrypt<B: BlockCipher + ?Sized>(
    cipher: &B,
    config: &CipherConfig,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    if plaintext.is_empty() && config.mode() != Mode::Gcm {
        return Ok(Vec::new());
    }
    encrypt_blocks(cipher, config, plaintext).wrap_encrypt()
}

/// Decrypt `ciphertext` with a block primitive
///
/// Failures are reported as [`Error::Decrypt`](crate::Error::Decrypt).
pub fn decrypt<B: BlockCipher + ?Sized>(
    cipher: &B,
    config: &CipherConfig,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() && config.mode() != Mode::Gcm {
        return Ok(Vec::new());
    }
    decrypt_blocks(cipher, config, ciphertext).wrap_decrypt()
}

/// XOR the next `data.len()` keystream bytes over a copy of `data`
///
/// The keystream position advances, so consecutive calls continue where
/// the previous one stopped.
pub fn apply_keystream<S: StreamCipher + ?Sized>(stream: &mut S, data: &[u8]) -> Result<Vec<u8>> {
    let mut out = data.to_vec();
    stream.process(&mut out)?;
    Ok(out)
}

/// One-shot encryption with a built primitive
///
/// Stream primitives restart their keystream from the beginning.
pub fn encrypt_with(primitive: &mut Primitive, config: &CipherConfig, plaintext: &[u8]) -> Result<Vec<u8>> {
    match primitive {
        Primitive::Block(block) => encrypt(&*block, config, plaintext),
        Primitive::Stream(stream) => restart_keystream(stream, plaintext).wrap_encrypt(),
    }
}

/// One-shot decryption with a built primitive
pub fn decrypt_with(primitive: &mut Primitive, config: &CipherConfig, ciphertext: &[u8]) -> Result<Vec<u8>> {
    match primitive {
        Primitive::Block(block) => decrypt(&*block, config, ciphertext),
        Primitive::Stream(stream) => restart_keystream(stream, ciphertext).wrap_decrypt(),
    }
}

fn restart_keystream<S: StreamCipher + ?Sized>(stream: &mut S, data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    stream.reset()?;
    apply_keystream(stream, data)
}

fn encrypt_blocks<B: BlockCipher + ?Sized>(
    cipher: &B,
    config: &CipherConfig,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let iv = config.iv();
    let ciphertext = match config.mode() {
        Mode::Ecb => Ecb::new(cipher).encrypt(&pad(cipher, config, plaintext)?)?,
        Mode::Cbc => Cbc::new(cipher, iv)?.encrypt(&pad(cipher, config, plaintext)?)?,
        Mode::Ctr => Ctr::new(cipher, iv)?.process(plaintext)?,
        Mode::Cfb => Cfb::new(cipher, iv)?.encrypt(plaintext)?,
        Mode::Ofb => Ofb::new(cipher, iv)?.process(plaintext)?,
        Mode::Gcm => Gcm::new(cipher, iv)?.encrypt(plaintext, config.aad())?,
    };
    Ok(ciphertext)
}

fn decrypt_blocks<B: BlockCipher + ?Sized>(
    cipher: &B,
    config: &CipherConfig,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let iv = config.iv();
    let plaintext = match config.mode() {
        Mode::Ecb => unpad(cipher, config, Ecb::new(cipher).decrypt(ciphertext)?)?,
        Mode::Cbc => unpad(cipher, config, Cbc::new(cipher, iv)?.decrypt(ciphertext)?)?,
        Mode::Ctr => Ctr::new(cipher, iv)?.process(ciphertext)?,
        Mode::Cfb => Cfb::new(cipher, iv)?.decrypt(ciphertext)?,
        Mode::Ofb => Ofb::new(cipher, iv)?.process(ciphertext)?,
        Mode::Gcm => Gcm::new(cipher, iv)?.decrypt(ciphertext, config.aad())?,
    };
    Ok(plaintext)
}

fn pad<B: BlockCipher + ?Sized>(
    cipher: &B,
    config: &CipherConfig,
    data: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let padded = config.padding().pad(data, cipher.block_size())?;
    Ok(Zeroizing::new(padded))
}

fn unpad<B: BlockCipher + ?Sized>(
    cipher: &B,
    config: &CipherConfig,
    padded: Vec<u8>,
) -> Result<Vec<u8>> {
    let padded = Zeroizing::new(padded);
    Ok(config.padding().unpad(&padded, cipher.block_size())?)
}
