//! Algorithm selection, configuration validation and primitive construction

use std::fmt;

use zeroize::Zeroizing;

use crate::config::{CipherConfig, Mode};
use crate::error::{validate, Error, Result};
use symkit_algorithms::{
    Aes, BlockCipher, ChaCha20, Des, StreamCipher, TripleDes, Twofish,
};
use symkit_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, CHACHA20_BLOCK_SIZE,
    CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, DES_BLOCK_SIZE, DES_KEY_SIZE, GCM_BLOCK_SIZE,
    GCM_NONCE_SIZE, TDES2_KEY_SIZE, TDES3_KEY_SIZE, TDES_BLOCK_SIZE, TWOFISH_BLOCK_SIZE,
    TWOFISH_KEY_SIZES,
};

/// Cipher algorithms available to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Single DES, 8-byte key
    Des,
    /// Triple DES EDE; 16-byte keys are expanded to K1K2K1
    TripleDes,
    /// Twofish with a 16, 24 or 32-byte key
    Twofish,
    /// AES-128/192/256
    Aes,
    /// ChaCha20 (IETF), runs under [`Mode::Ctr`] only
    ChaCha20,
}

const AES_KEY_SIZES: [usize; 3] = [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

impl Algorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Des,
        Algorithm::TripleDes,
        Algorithm::Twofish,
        Algorithm::Aes,
        Algorithm::ChaCha20,
    ];

    /// Display name used in errors and logs
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Des => "DES",
            Algorithm::TripleDes => "3DES",
            Algorithm::Twofish => "Twofish",
            Algorithm::Aes => "AES",
            Algorithm::ChaCha20 => "ChaCha20",
        }
    }

    /// Block size in bytes; for ChaCha20 the keystream block
    pub fn block_size(&self) -> usize {
        match self {
            Algorithm::Des => DES_BLOCK_SIZE,
            Algorithm::TripleDes => TDES_BLOCK_SIZE,
            Algorithm::Twofish => TWOFISH_BLOCK_SIZE,
            Algorithm::Aes => AES_BLOCK_SIZE,
            Algorithm::ChaCha20 => CHACHA20_BLOCK_SIZE,
        }
    }

    /// Accepted key lengths in bytes
    pub fn key_sizes(&self) -> &'static [usize] {
        match self {
            Algorithm::Des => &[DES_KEY_SIZE],
            Algorithm::TripleDes => &[TDES2_KEY_SIZE, TDES3_KEY_SIZE],
            Algorithm::Twofish => &TWOFISH_KEY_SIZES,
            Algorithm::Aes => &AES_KEY_SIZES,
            Algorithm::ChaCha20 => &[CHACHA20_KEY_SIZE],
        }
    }

    /// Whether the algorithm is a keystream generator rather than a block permutation
    pub fn is_stream(&self) -> bool {
        matches!(self, Algorithm::ChaCha20)
    }

    /// Whether `mode` can be used with this algorithm
    pub fn supports(&self, mode: Mode) -> bool {
        match (self, mode) {
            (Algorithm::ChaCha20, mode) => mode == Mode::Ctr,
            (_, Mode::Gcm) => self.block_size() == GCM_BLOCK_SIZE,
            _ => true,
        }
    }

    /// Required IV/nonce length for `mode`, `None` when the mode takes none
    pub fn nonce_size(&self, mode: Mode) -> Option<usize> {
        match (self, mode) {
            (Algorithm::ChaCha20, _) => Some(CHACHA20_NONCE_SIZE),
            (_, Mode::Ecb) => None,
            (_, Mode::Gcm) => Some(GCM_NONCE_SIZE),
            _ => Some(self.block_size()),
        }
    }

    /// Check key size, mode support and IV length, in that order
    pub fn validate(&self, config: &CipherConfig) -> Result<()> {
        validate::key_size(self.name(), config.key().len(), self.key_sizes())?;

        let mode = config.mode();
        if !self.supports(mode) {
            return Err(Error::UnsupportedMode {
                algorithm: self.name(),
                mode: mode.name(),
            });
        }

        if let Some(expected) = self.nonce_size(mode) {
            validate::nonce_size(self.name(), config.iv().len(), expected)?;
        }
        Ok(())
    }

    /// Validate `config` and construct the keyed primitive
    pub fn build(&self, config: &CipherConfig) -> Result<Primitive> {
        self.validate(config)?;
        let key = config.key();

        let primitive = match self {
            Algorithm::Des => Primitive::Block(BlockPrimitive::Des(Des::new(key)?)),
            Algorithm::TripleDes => {
                let key = expand_tdes_key(key);
                Primitive::Block(BlockPrimitive::TripleDes(TripleDes::new(&key)?))
            }
            Algorithm::Twofish => Primitive::Block(BlockPrimitive::Twofish(Twofish::new(key)?)),
            Algorithm::Aes => Primitive::Block(BlockPrimitive::Aes(Aes::new(key)?)),
            Algorithm::ChaCha20 => Primitive::Stream(ChaCha20::new(key, config.iv())?),
        };
        Ok(primitive)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two-key 3DES: K1 K2 becomes K1 K2 K1
fn expand_tdes_key(key: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut expanded = Zeroizing::new(key.to_vec());
    if key.len() == TDES2_KEY_SIZE {
        expanded.extend_from_slice(&key[..DES_KEY_SIZE]);
    }
    expanded
}

/// Keyed block primitive
pub enum BlockPrimitive {
    Des(Des),
    TripleDes(TripleDes),
    Twofish(Twofish),
    Aes(Aes),
}

impl BlockCipher for BlockPrimitive {
    fn block_size(&self) -> usize {
        match self {
            BlockPrimitive::Des(c) => c.block_size(),
            BlockPrimitive::TripleDes(c) => c.block_size(),
            BlockPrimitive::Twofish(c) => c.block_size(),
            BlockPrimitive::Aes(c) => c.block_size(),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> symkit_algorithms::Result<()> {
        match self {
            BlockPrimitive::Des(c) => c.encrypt_block(block),
            BlockPrimitive::TripleDes(c) => c.encrypt_block(block),
            BlockPrimitive::Twofish(c) => c.encrypt_block(block),
            BlockPrimitive::Aes(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) -> symkit_algorithms::Result<()> {
        match self {
            BlockPrimitive::Des(c) => c.decrypt_block(block),
            BlockPrimitive::TripleDes(c) => c.decrypt_block(block),
            BlockPrimitive::Twofish(c) => c.decrypt_block(block),
            BlockPrimitive::Aes(c) => c.decrypt_block(block),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BlockPrimitive::Des(c) => c.name(),
            BlockPrimitive::TripleDes(c) => c.name(),
            BlockPrimitive::Twofish(c) => c.name(),
            BlockPrimitive::Aes(c) => c.name(),
        }
    }
}

/// A keyed primitive, tagged by how the engine drives it
pub enum Primitive {
    /// Block permutation, run through a mode of operation
    Block(BlockPrimitive),
    /// Keystream generator, XORed over the data
    Stream(ChaCha20),
}

impl Primitive {
    /// Whether this is the ChaCha20 keystream
    pub fn is_stream(&self) -> bool {
        matches!(self, Primitive::Stream(_))
    }

    /// Name of the underlying algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Block(block) => block.name(),
            Primitive::Stream(stream) => stream.name(),
        }
    }
}
