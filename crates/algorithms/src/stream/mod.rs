//! Stream cipher implementations
//!
//! A stream cipher produces a keystream that is XORed with the data, so
//! encryption and decryption are the same operation and inputs of any
//! length are accepted.
//!
//! # Security Considerations
//!
//! Reusing a (key, nonce) pair reveals the XOR of the two plaintexts.

pub mod chacha20;

// Re-export commonly used types
pub use self::chacha20::ChaCha20;

use crate::error::Result;

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// Apply the keystream to `data` in place, advancing the position
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Write raw keystream bytes into `output`
    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.process(output)
    }

    /// Move to an absolute byte offset in the keystream
    fn seek(&mut self, position: u64) -> Result<()>;

    /// Rewind to the start of the keystream
    fn reset(&mut self) -> Result<()> {
        self.seek(0)
    }

    /// Algorithm name
    fn name(&self) -> &'static str;
}
