//! Streaming encryption and decryption over `std::io`
//!
//! [`EncryptWriter`] encrypts into a sink, [`DecryptReader`] decrypts from
//! a source. How data is grouped depends on the primitive:
//!
//! - block ciphers frame each `write` as an independent message (padded,
//!   tagged, IV restarted), and the reader decrypts its whole source as a
//!   single message, buffering the plaintext across reads
//! - stream ciphers continue one keystream across calls, so chunking never
//!   changes the output
//!
//! Configuration errors and sink/source failures are recorded; every later
//! call fails with the same error.

use std::io::{Read, Write};

use tracing::debug;

use crate::algorithm::Algorithm;
use crate::config::CipherConfig;
use crate::error::{Error, IoResultExt, Result};

mod decrypt;
mod encrypt;

pub use decrypt::DecryptReader;
pub use encrypt::EncryptWriter;

/// Chunk size used by [`encrypt_stream`] and [`decrypt_stream`]
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Trait for streaming encryption operations
pub trait StreamingEncrypt<W: Write> {
    /// Encrypt `data` into the sink, returning the plaintext bytes consumed
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Flush the sink and refuse further writes
    fn close(&mut self) -> Result<()>;

    /// Close the stream and hand back the sink
    fn finalize(self) -> Result<W>;
}

/// Trait for streaming decryption operations
pub trait StreamingDecrypt<R: Read> {
    /// Decrypt into `buf`; `Ok(0)` signals end of input
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// Encrypt everything `reader` yields into `writer`
///
/// Stream ciphers are fed in [`CHUNK_SIZE`] pieces. Block ciphers receive
/// the whole input as one frame, so [`decrypt_stream`] can invert the
/// output. Returns the sink.
pub fn encrypt_stream<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    algorithm: Algorithm,
    config: CipherConfig,
) -> Result<W> {
    let mut stream = EncryptWriter::new(writer, algorithm, config);

    if algorithm.is_stream() {
        let mut chunk = vec![0u8; CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::read(&e)),
            };
            stream.write(&chunk[..n])?;
        }
    } else {
        let mut plaintext = zeroize::Zeroizing::new(Vec::new());
        reader.read_to_end(&mut plaintext).map_read_err()?;
        stream.write(&plaintext)?;
    }

    stream.finalize()
}

/// Decrypt everything `reader` yields into `writer`, returning the plaintext length
pub fn decrypt_stream<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    algorithm: Algorithm,
    config: CipherConfig,
) -> Result<u64> {
    let mut stream = DecryptReader::new(reader, algorithm, config);
    let mut chunk = zeroize::Zeroizing::new(vec![0u8; CHUNK_SIZE]);
    let mut total = 0u64;

    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(Error::Buffer { copied, .. }) => copied,
            Err(e) => return Err(e),
        };
        writer.write_all(&chunk[..n]).map_write_err()?;
        total += n as u64;
    }
    writer.flush().map_write_err()?;

    debug!(algorithm = %algorithm, bytes = total, "stream decrypted");
    Ok(total)
}
