//! Authenticated encryption modes
//!
//! GCM (NIST SP 800-38D) over any 128-bit [`BlockCipher`].
//!
//! [`BlockCipher`]: crate::block::BlockCipher

pub mod gcm;

pub use gcm::Gcm;
