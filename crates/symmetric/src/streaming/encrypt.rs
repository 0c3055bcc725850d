//! Encrypting sink adapter

use std::io::{self, Write};

use tracing::{debug, trace};

use super::StreamingEncrypt;
use crate::algorithm::Algorithm;
use crate::cipher::Cipher;
use crate::config::CipherConfig;
use crate::error::{Error, IoResultExt, Result};

/// Encrypts every write into the wrapped sink
pub struct EncryptWriter<W: Write> {
    sink: W,
    cipher: Cipher,
    error: Option<Error>,
    closed: bool,
}

impl<W: Write> EncryptWriter<W> {
    /// Wrap `sink`; an invalid config is reported by the first call
    pub fn new(sink: W, algorithm: Algorithm, config: CipherConfig) -> Self {
        Self::from_cipher(sink, Cipher::new(algorithm, config))
    }

    /// Wraps `sink` around an existing [`Cipher`], keeping its stored error
    pub fn from_cipher(sink: W, cipher: Cipher) -> Self {
        let error = cipher.error().cloned();
        Self {
            sink,
            cipher,
            error,
            closed: false,
        }
    }

    /// Encrypt `chunk` and write it to the sink
    ///
    /// Returns the number of plaintext bytes consumed, which is always the
    /// whole chunk. A block cipher emits one complete message per call.
    pub fn write(&mut self, chunk: &[u8]) -> Result<usize> {
        self.check()?;
        if chunk.is_empty() {
            return Ok(0);
        }

        // Not recorded: a bad chunk (say, unaligned under no padding) leaves the stream usable
        let ciphertext = self.cipher.encrypt_chunk(chunk)?;

        if let Err(err) = self.sink.write_all(&ciphertext).map_write_err() {
            debug!(error = %err, "sink write failed, stream disabled");
            self.error = Some(err.clone());
            return Err(err);
        }

        trace!(plaintext = chunk.len(), ciphertext = ciphertext.len(), "chunk encrypted");
        Ok(chunk.len())
    }

    /// Flush the sink and close the stream
    ///
    /// Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.closed {
            return Ok(());
        }

        if let Err(err) = self.sink.flush().map_write_err() {
            self.error = Some(err.clone());
            return Err(err);
        }
        self.closed = true;
        debug!(algorithm = %self.cipher.algorithm(), "encrypt stream closed");
        Ok(())
    }

    /// Close the stream and return the sink
    pub fn finalize(mut self) -> Result<W> {
        self.close()?;
        Ok(self.sink)
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Borrow the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Unwrap the sink without closing
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn check(&self) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.closed {
            return Err(Error::Closed);
        }
        Ok(())
    }
}

impl<W: Write> StreamingEncrypt<W> for EncryptWriter<W> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        EncryptWriter::write(self, data)
    }

    fn close(&mut self) -> Result<()> {
        EncryptWriter::close(self)
    }

    fn finalize(self) -> Result<W> {
        EncryptWriter::finalize(self)
    }
}

impl<W: Write> Write for EncryptWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        EncryptWriter::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.check()?;
        self.sink.flush()
    }
}
