//! Constants for symmetric encryption algorithms

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// Two-key Triple DES (K1, K2, K1) key size in bytes
pub const TDES2_KEY_SIZE: usize = 16;

/// Three-key Triple DES key size in bytes
pub const TDES3_KEY_SIZE: usize = 24;

/// Triple DES block size in bytes
pub const TDES_BLOCK_SIZE: usize = 8;

/// Twofish key sizes in bytes
pub const TWOFISH_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Twofish block size in bytes
pub const TWOFISH_BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// GCM block size in bytes; only 128-bit block ciphers run under GCM
pub const GCM_BLOCK_SIZE: usize = 16;

/// Recommended GCM nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Shortest GCM tag accepted by the raw mode
pub const GCM_MIN_TAG_SIZE: usize = 12;
