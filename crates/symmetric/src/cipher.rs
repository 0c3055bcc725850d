//! One-shot cipher entity
//!
//! A [`Cipher`] pairs an [`Algorithm`] with a [`CipherConfig`]. The config
//! is validated once, at construction; a validation error is kept and
//! returned verbatim by every later call. The keyed primitive is built on
//! first use and cached.

use tracing::{debug, trace};

use crate::algorithm::{Algorithm, Primitive};
use crate::config::CipherConfig;
use crate::engine;
use crate::error::{Error, Result};

/// Algorithm, configuration and lazily built primitive
pub struct Cipher {
    algorithm: Algorithm,
    config: CipherConfig,
    primitive: Option<Primitive>,
    error: Option<Error>,
}

impl Cipher {
    /// Creates a cipher; configuration problems surface on first use
    pub fn new(algorithm: Algorithm, config: CipherConfig) -> Self {
        let error = algorithm.validate(&config).err();
        match &error {
            Some(err) => debug!(algorithm = %algorithm, mode = %config.mode(), error = %err, "cipher configuration rejected"),
            None => debug!(algorithm = %algorithm, mode = %config.mode(), padding = %config.padding(), "cipher configured"),
        }

        Self {
            algorithm,
            config,
            primitive: None,
            error,
        }
    }

    /// DES with an 8-byte key
    pub fn des(config: CipherConfig) -> Self {
        Self::new(Algorithm::Des, config)
    }

    /// 3DES with a 16-byte (two-key) or 24-byte key
    pub fn triple_des(config: CipherConfig) -> Self {
        Self::new(Algorithm::TripleDes, config)
    }

    /// Twofish with a 16, 24 or 32-byte key
    pub fn twofish(config: CipherConfig) -> Self {
        Self::new(Algorithm::Twofish, config)
    }

    /// AES-128, AES-192 or AES-256, chosen by key length
    pub fn aes(config: CipherConfig) -> Self {
        Self::new(Algorithm::Aes, config)
    }

    /// ChaCha20; only valid under [`Mode::Ctr`](crate::Mode::Ctr)
    pub fn chacha20(config: CipherConfig) -> Self {
        Self::new(Algorithm::ChaCha20, config)
    }

    /// The algorithm this cipher was created for
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The configuration this cipher was created with
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// The stored validation error, if the configuration was rejected
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Encrypt a whole message
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let (primitive, config) = self.primitive(Error::encrypt)?;
        engine::encrypt_with(primitive, config, plaintext)
    }

    /// Decrypt a whole message
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let (primitive, config) = self.primitive(Error::decrypt)?;
        engine::decrypt_with(primitive, config, ciphertext)
    }

    /// Continue the keystream of a stream primitive over `data`
    ///
    /// Block primitives have no keystream to continue; they encrypt `data`
    /// as a standalone message.
    pub(crate) fn encrypt_chunk(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let (primitive, config) = self.primitive(Error::encrypt)?;
        if let Primitive::Stream(stream) = primitive {
            return engine::apply_keystream(stream, data).map_err(Error::encrypt);
        }
        engine::encrypt_with(primitive, config, data)
    }

    /// Decrypt counterpart of [`encrypt_chunk`](Self::encrypt_chunk)
    pub(crate) fn decrypt_chunk(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let (primitive, config) = self.primitive(Error::decrypt)?;
        if let Primitive::Stream(stream) = primitive {
            return engine::apply_keystream(stream, data).map_err(Error::decrypt);
        }
        engine::decrypt_with(primitive, config, data)
    }

    /// Whether data is driven as a keystream rather than framed messages
    pub(crate) fn is_stream(&self) -> bool {
        self.algorithm.is_stream()
    }

    /// The primitive, built on first use
    ///
    /// The stored validation error is returned as is; a construction
    /// failure goes through `wrap` and is not cached, so the next call retries.
    fn primitive(&mut self, wrap: fn(Error) -> Error) -> Result<(&mut Primitive, &CipherConfig)> {
        if let Some(err) = &self.error {
            debug!(algorithm = %self.algorithm, error = %err, "replaying stored configuration error");
            return Err(err.clone());
        }

        let primitive = match self.primitive.take() {
            Some(primitive) => primitive,
            None => {
                let built = self.algorithm.build(&self.config).map_err(wrap)?;
                trace!(algorithm = %self.algorithm, primitive = built.name(), "primitive constructed");
                built
            }
        };
        Ok((self.primitive.insert(primitive), &self.config))
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipher")
            .field("algorithm", &self.algorithm)
            .field("config", &self.config)
            .field("built", &self.primitive.is_some())
            .field("error", &self.error)
            .finish()
    }
}
