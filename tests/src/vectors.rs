//! Known-answer vectors shared by the integration tests and benches

use symkit_algorithms::PaddingScheme;
use symkit_symmetric::{Algorithm, CipherConfig, Mode};

/// One known-answer case
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    pub name: &'static str,
    pub algorithm: Algorithm,
    pub mode: Mode,
    pub padding: PaddingScheme,
    pub key: &'static [u8],
    pub iv: &'static [u8],
    pub aad: Option<&'static [u8]>,
    pub plaintext: &'static [u8],
    pub ciphertext: &'static str,
}

impl KnownAnswer {
    /// Configuration for this case
    pub fn config(&self) -> CipherConfig {
        let mut config = CipherConfig::new(self.mode, self.key)
            .with_iv(self.iv)
            .with_padding(self.padding);
        config.set_aad(self.aad);
        config
    }

    /// Expected ciphertext bytes
    pub fn ciphertext(&self) -> Vec<u8> {
        hex::decode(self.ciphertext).unwrap_or_default()
    }
}

/// Plaintext shared by most cases
pub const HELLO: &[u8] = b"hello world";

/// Known-answer cases, one per algorithm/mode pairing
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "3des-cbc-pkcs7",
        algorithm: Algorithm::TripleDes,
        mode: Mode::Cbc,
        padding: PaddingScheme::Pkcs7,
        key: b"1234567890123456",
        iv: b"12345678",
        aad: None,
        plaintext: HELLO,
        ciphertext: "e05b5cfbaa19608beb9c220a3aa79a35",
    },
    KnownAnswer {
        name: "3des-ecb-pkcs7",
        algorithm: Algorithm::TripleDes,
        mode: Mode::Ecb,
        padding: PaddingScheme::Pkcs7,
        key: b"1234567890123456",
        iv: b"",
        aad: None,
        plaintext: HELLO,
        ciphertext: "4c1a21564de3d72973cb3b918af5c91d",
    },
    KnownAnswer {
        name: "des-ecb-pkcs5",
        algorithm: Algorithm::Des,
        mode: Mode::Ecb,
        padding: PaddingScheme::Pkcs5,
        key: b"12345678",
        iv: b"",
        aad: None,
        plaintext: HELLO,
        ciphertext: "28dba02eb5f6dd475d82e3681c83bb77",
    },
    KnownAnswer {
        name: "des-cbc-pkcs7",
        algorithm: Algorithm::Des,
        mode: Mode::Cbc,
        padding: PaddingScheme::Pkcs7,
        key: b"12345678",
        iv: b"87654321",
        aad: None,
        plaintext: HELLO,
        ciphertext: "7fae94fd1a8b880d8d5454dd8df30c40",
    },
    KnownAnswer {
        name: "aes-gcm-aad",
        algorithm: Algorithm::Aes,
        mode: Mode::Gcm,
        padding: PaddingScheme::Pkcs7,
        key: &[0x42; 16],
        iv: &[0x24; 12],
        aad: Some(b"header"),
        plaintext: HELLO,
        ciphertext: "89e5370b742637cbe25812898eb68f2ba65e45d823ed01fbb86da8",
    },
    KnownAnswer {
        name: "aes-gcm",
        algorithm: Algorithm::Aes,
        mode: Mode::Gcm,
        padding: PaddingScheme::Pkcs7,
        key: &[0x42; 16],
        iv: &[0x24; 12],
        aad: None,
        plaintext: HELLO,
        ciphertext: "89e5370b742637cbe25812acc33bd416660fc34af2a963c0f6396c",
    },
    KnownAnswer {
        name: "aes-ctr-zero-counter",
        algorithm: Algorithm::Aes,
        mode: Mode::Ctr,
        padding: PaddingScheme::No,
        key: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        iv: &[0; 16],
        aad: None,
        plaintext: HELLO,
        ciphertext: "aec4575be8af2ced1d23e5",
    },
    KnownAnswer {
        name: "chacha20",
        algorithm: Algorithm::ChaCha20,
        mode: Mode::Ctr,
        padding: PaddingScheme::No,
        key: &[b'k'; 32],
        iv: &[b'n'; 12],
        aad: None,
        plaintext: HELLO,
        ciphertext: "eebd774edd2eb925b23a62",
    },
];
