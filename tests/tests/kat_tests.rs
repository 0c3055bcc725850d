//! Known-answer tests through the one-shot and streaming surfaces

use std::io::Cursor;

use symkit_api::Error;
use symkit_symmetric::{Algorithm, Cipher, CipherConfig, DecryptReader, EncryptWriter, Mode};
use symkit_tests::vectors::{HELLO, KNOWN_ANSWERS};

#[test]
fn test_known_answers_one_shot() {
    for kat in KNOWN_ANSWERS {
        let mut cipher = Cipher::new(kat.algorithm, kat.config());
        let ciphertext = cipher.encrypt(kat.plaintext).unwrap();
        assert_eq!(hex::encode(&ciphertext), kat.ciphertext, "{}", kat.name);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), kat.plaintext, "{}", kat.name);
    }
}

#[test]
fn test_known_answers_streaming() {
    for kat in KNOWN_ANSWERS {
        let mut writer = EncryptWriter::new(Vec::new(), kat.algorithm, kat.config());
        writer.write(kat.plaintext).unwrap();
        let sink = writer.finalize().unwrap();
        assert_eq!(sink, kat.ciphertext(), "{}", kat.name);

        let mut reader = DecryptReader::new(Cursor::new(sink), kat.algorithm, kat.config());
        let mut buf = vec![0u8; 64];
        let n = reader.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], kat.plaintext, "{}", kat.name);
    }
}

#[test]
fn test_empty_plaintext_every_algorithm() {
    for kat in KNOWN_ANSWERS {
        let mut cipher = Cipher::new(kat.algorithm, kat.config());
        if kat.mode == Mode::Gcm {
            let tag = cipher.encrypt(b"").unwrap();
            assert_eq!(tag.len(), 16, "{}", kat.name);
            assert!(cipher.decrypt(&tag).unwrap().is_empty(), "{}", kat.name);
            let err = cipher.decrypt(b"").unwrap_err();
            assert!(matches!(err.root_cause(), Error::InvalidLength { .. }), "{}", kat.name);
        } else {
            assert!(cipher.encrypt(b"").unwrap().is_empty(), "{}", kat.name);
            assert!(cipher.decrypt(b"").unwrap().is_empty(), "{}", kat.name);
        }
    }
}

#[test]
fn test_gcm_tamper_detection() {
    let kat = KNOWN_ANSWERS.iter().find(|k| k.name == "aes-gcm-aad").unwrap();
    let ciphertext = kat.ciphertext();

    for i in [0, HELLO.len() - 1, HELLO.len(), ciphertext.len() - 1] {
        let mut tampered = ciphertext.clone();
        tampered[i] ^= 0x80;
        let err = Cipher::new(kat.algorithm, kat.config()).decrypt(&tampered).unwrap_err();
        assert!(err.is_authentication(), "byte {i}: {err}");
    }

    let truncated = &ciphertext[..ciphertext.len() - 1];
    assert!(Cipher::new(kat.algorithm, kat.config()).decrypt(truncated).is_err());

    let tag_only = &ciphertext[HELLO.len()..];
    let err = Cipher::new(kat.algorithm, kat.config()).decrypt(tag_only).unwrap_err();
    assert!(err.is_authentication());
}

#[test]
fn test_configuration_errors() {
    let cases = [
        (
            Algorithm::Des,
            CipherConfig::new(Mode::Cbc, b"1234567").with_iv(b"12345678"),
            Error::KeySize { algorithm: "DES", actual: 7 },
        ),
        (
            Algorithm::Aes,
            CipherConfig::new(Mode::Gcm, &[0u8; 16]).with_iv(&[0u8; 16]),
            Error::InvalidNonceSize { context: "AES", expected: 12, actual: 16 },
        ),
        (
            Algorithm::TripleDes,
            CipherConfig::new(Mode::Gcm, &[0u8; 24]).with_iv(&[0u8; 12]),
            Error::UnsupportedMode { algorithm: "3DES", mode: "GCM" },
        ),
        (
            Algorithm::ChaCha20,
            CipherConfig::new(Mode::Cbc, &[0u8; 32]).with_iv(&[0u8; 12]),
            Error::UnsupportedMode { algorithm: "ChaCha20", mode: "CBC" },
        ),
    ];

    for (algorithm, config, expected) in cases {
        let mut cipher = Cipher::new(algorithm, config.clone());
        assert_eq!(cipher.encrypt(HELLO), Err(expected.clone()));
        assert_eq!(cipher.encrypt(HELLO), Err(expected.clone()));
        assert!(expected.is_validation());

        let mut reader = DecryptReader::new(Cursor::new(vec![1u8; 16]), algorithm, config);
        assert_eq!(reader.read(&mut [0u8; 16]), Err(expected));
    }
}
