//! Cipher configuration: mode, key, IV/nonce, AAD and padding

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::error::{Error, Result};
use symkit_algorithms::PaddingScheme;

/// Mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    #[default]
    Cbc,
    /// Counter mode; also the keystream mode of stream ciphers
    Ctr,
    /// Cipher feedback, full-block segments
    Cfb,
    /// Output feedback
    Ofb,
    /// Galois/counter mode with a 16-byte tag
    Gcm,
}

impl Mode {
    /// Every mode, in declaration order
    pub const ALL: [Mode; 6] = [Mode::Ecb, Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb, Mode::Gcm];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Ctr => "CTR",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
            Mode::Gcm => "GCM",
        }
    }

    /// ECB and CBC pad; the keystream modes pass data through unpadded
    pub fn uses_padding(&self) -> bool {
        matches!(self, Mode::Ecb | Mode::Cbc)
    }

    /// Whether the mode consumes an IV or nonce
    pub fn requires_iv(&self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Whether the mode appends an authentication tag
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Mode::Gcm)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::param("mode", format!("unknown mode '{s}'")))
    }
}

/// Everything a transform needs besides the algorithm
///
/// Key bytes are wiped on drop and never printed by `Debug`.
#[derive(Clone)]
pub struct CipherConfig {
    mode: Mode,
    key: Zeroizing<Vec<u8>>,
    iv: Vec<u8>,
    aad: Option<Vec<u8>>,
    padding: PaddingScheme,
}

impl CipherConfig {
    /// Config with no IV, no AAD and PKCS#7 padding
    pub fn new(mode: Mode, key: &[u8]) -> Self {
        Self {
            mode,
            key: Zeroizing::new(key.to_vec()),
            iv: Vec::new(),
            aad: None,
            padding: PaddingScheme::default(),
        }
    }

    /// Builder form of [`set_iv`](Self::set_iv)
    pub fn with_iv(mut self, iv: &[u8]) -> Self {
        self.set_iv(iv);
        self
    }

    /// Builder form of [`set_aad`](Self::set_aad)
    pub fn with_aad(mut self, aad: &[u8]) -> Self {
        self.set_aad(Some(aad));
        self
    }

    /// Builder form of [`set_padding`](Self::set_padding)
    pub fn with_padding(mut self, padding: PaddingScheme) -> Self {
        self.set_padding(padding);
        self
    }

    /// Replace the mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Replace the key; the old key is zeroized
    pub fn set_key(&mut self, key: &[u8]) {
        self.key = Zeroizing::new(key.to_vec());
    }

    /// Sets the IV (CBC/CFB/OFB), initial counter block (CTR) or nonce (GCM, ChaCha20)
    pub fn set_iv(&mut self, iv: &[u8]) {
        self.iv = iv.to_vec();
    }

    /// Sets additional authenticated data; only GCM reads it
    pub fn set_aad(&mut self, aad: Option<&[u8]>) {
        self.aad = aad.map(<[u8]>::to_vec);
    }

    /// Replace the padding scheme
    pub fn set_padding(&mut self, padding: PaddingScheme) {
        self.padding = padding;
    }

    /// Mode of operation
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Raw key bytes
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// IV, nonce or initial counter block; empty when unset
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Additional authenticated data for GCM
    pub fn aad(&self) -> Option<&[u8]> {
        self.aad.as_deref()
    }

    /// Padding scheme used by ECB and CBC
    pub fn padding(&self) -> PaddingScheme {
        self.padding
    }
}

impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("mode", &self.mode)
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.len())
            .field("aad_len", &self.aad.as_ref().map(Vec::len))
            .field("padding", &self.padding)
            .finish()
    }
}
