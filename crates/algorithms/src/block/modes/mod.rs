//! Block cipher modes of operation
//!
//! This module implements the raw modes over any [`BlockCipher`]:
//! ECB and CBC on block-aligned buffers, and the keystream modes CTR, CFB
//! and OFB on buffers of any length. Padding is not applied here.
//!
//! [`BlockCipher`]: super::BlockCipher

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;
