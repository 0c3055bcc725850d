//! Decrypting source adapter

use std::io::{self, Read};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::StreamingDecrypt;
use crate::algorithm::Algorithm;
use crate::cipher::Cipher;
use crate::config::CipherConfig;
use crate::error::{Error, IoResultExt, Result};

/// Decrypts from the wrapped source on every read
pub struct DecryptReader<R: Read> {
    source: R,
    cipher: Cipher,
    error: Option<Error>,
    // Block discipline: the decrypted source and how much of it was handed out
    plaintext: Option<Zeroizing<Vec<u8>>>,
    cursor: usize,
}

impl<R: Read> DecryptReader<R> {
    /// Wrap `source`; an invalid config is reported by the first read
    pub fn new(source: R, algorithm: Algorithm, config: CipherConfig) -> Self {
        Self::from_cipher(source, Cipher::new(algorithm, config))
    }

    /// Wraps `source` around an existing [`Cipher`], keeping its stored error
    pub fn from_cipher(source: R, cipher: Cipher) -> Self {
        let error = cipher.error().cloned();
        Self {
            source,
            cipher,
            error,
            plaintext: None,
            cursor: 0,
        }
    }

    /// Decrypt into `buf`
    ///
    /// `Ok(0)` means the source is exhausted. Under a block cipher, a
    /// buffer shorter than the remaining plaintext is filled and
    /// [`Error::Buffer`] reports how much was copied; the rest is kept for
    /// the next read.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        if self.cipher.is_stream() {
            self.read_keystream(buf)
        } else {
            self.read_message(buf)
        }
    }

    /// Bytes decrypted but not yet handed out
    pub fn buffered(&self) -> usize {
        self.plaintext.as_ref().map_or(0, |p| p.len() - self.cursor)
    }

    /// Borrow the underlying source
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Unwrap the underlying source, dropping any buffered plaintext
    pub fn into_inner(self) -> R {
        self.source
    }

    fn read_message(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.plaintext.is_none() {
            let plaintext = self.decrypt_source()?;
            self.plaintext = Some(plaintext);
        }

        let available = match &self.plaintext {
            Some(plaintext) => &plaintext[self.cursor..],
            None => return Ok(0),
        };

        let copied = available.len().min(buf.len());
        buf[..copied].copy_from_slice(&available[..copied]);
        let remaining = available.len() - copied;
        self.cursor += copied;

        if remaining > 0 {
            return Err(Error::Buffer { copied, remaining });
        }
        Ok(copied)
    }

    /// Read the whole source and decrypt it as one message
    fn decrypt_source(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        let mut ciphertext = Vec::new();
        if let Err(err) = self.source.read_to_end(&mut ciphertext).map_read_err() {
            return Err(self.record(err));
        }

        match self.cipher.decrypt(&ciphertext) {
            Ok(plaintext) => {
                debug!(ciphertext = ciphertext.len(), plaintext = plaintext.len(), "source decrypted");
                Ok(Zeroizing::new(plaintext))
            }
            Err(err) => Err(self.record(err)),
        }
    }

    fn read_keystream(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        // Source errors, end of input included, pass straight through
        let mut ciphertext = vec![0u8; buf.len()];
        let n = self.source.read(&mut ciphertext).map_read_err()?;
        if n == 0 {
            return Ok(0);
        }

        let plaintext = match self.cipher.decrypt_chunk(&ciphertext[..n]) {
            Ok(plaintext) => Zeroizing::new(plaintext),
            Err(err) => return Err(self.record(err)),
        };
        buf[..n].copy_from_slice(&plaintext);

        trace!(bytes = n, "chunk decrypted");
        Ok(n)
    }

    fn record(&mut self, err: Error) -> Error {
        debug!(error = %err, "decrypt stream disabled");
        self.error = Some(err.clone());
        err
    }
}

impl<R: Read> StreamingDecrypt<R> for DecryptReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        DecryptReader::read(self, buf)
    }
}

impl<R: Read> Read for DecryptReader<R> {
    /// A short buffer yields a short read; the rest follows on later reads
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match DecryptReader::read(self, buf) {
            Err(Error::Buffer { copied, .. }) => Ok(copied),
            other => other.map_err(io::Error::from),
        }
    }
}
