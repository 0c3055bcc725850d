//! Block cipher primitives and modes of operation
//!
//! A block primitive is anything that can encrypt and decrypt one
//! fixed-size block in place. The concrete ciphers here wrap the RustCrypto
//! implementations; the modes in [`modes`] accept any [`BlockCipher`],
//! including trait objects.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt};

use crate::error::{validate, Result};

pub mod aes;
pub mod des;
pub mod modes;
pub mod twofish;

// Re-exports
pub use self::aes::Aes;
pub use self::des::{Des, TripleDes};
pub use self::twofish::Twofish;
pub use modes::{Cbc, Cfb, Ctr, Ecb, Ofb};

/// Encrypt/decrypt capability over a fixed block size
///
/// Implementations must reject buffers whose length differs from
/// [`block_size`](Self::block_size) instead of panicking.
pub trait BlockCipher {
    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Algorithm name
    fn name(&self) -> &'static str;
}

impl<B: BlockCipher + ?Sized> BlockCipher for &B {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).decrypt_block(block)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Run a RustCrypto block encryption over a checked slice
pub(crate) fn encrypt_with<C: BlockEncrypt>(
    cipher: &C,
    block: &mut [u8],
    context: &'static str,
) -> Result<()> {
    validate::length(context, block.len(), C::block_size())?;
    BlockEncrypt::encrypt_block(cipher, GenericArray::from_mut_slice(block));
    Ok(())
}

/// Run a RustCrypto block decryption over a checked slice
pub(crate) fn decrypt_with<C: BlockDecrypt>(
    cipher: &C,
    block: &mut [u8],
    context: &'static str,
) -> Result<()> {
    validate::length(context, block.len(), C::block_size())?;
    BlockDecrypt::decrypt_block(cipher, GenericArray::from_mut_slice(block));
    Ok(())
}
