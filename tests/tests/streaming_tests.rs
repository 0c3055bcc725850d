//! Streaming adapter behavior against scripted sinks and sources

use std::io::{self, Cursor, Read, Write};

use symkit_api::Error;
use symkit_symmetric::{
    decrypt_stream, encrypt_stream, Algorithm, Cipher, CipherConfig, DecryptReader,
    EncryptWriter, Mode, StreamingDecrypt, StreamingEncrypt,
};
use symkit_tests::{ChunkedReader, FailingReader, FailingWriter, TrackingWriter};

fn aes_cbc() -> CipherConfig {
    CipherConfig::new(Mode::Cbc, &[0x11; 16]).with_iv(&[0x22; 16])
}

fn chacha() -> CipherConfig {
    CipherConfig::new(Mode::Ctr, &[0x33; 32]).with_iv(&[0x44; 12])
}

/// Drive any `StreamingEncrypt` through the trait only
fn encrypt_all<W: Write, S: StreamingEncrypt<W>>(mut stream: S, chunks: &[&[u8]]) -> W {
    for chunk in chunks {
        assert_eq!(stream.write(chunk).unwrap(), chunk.len());
    }
    stream.finalize().unwrap()
}

/// Drain any `StreamingDecrypt`, accepting short buffers
fn decrypt_all<R: Read, S: StreamingDecrypt<R>>(stream: &mut S, buf_len: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; buf_len];
    loop {
        match stream.read(&mut buf) {
            Ok(0) => return out,
            Ok(n) | Err(Error::Buffer { copied: n, .. }) => out.extend_from_slice(&buf[..n]),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}

#[test]
fn test_block_frames_decrypt_independently() {
    let writer = EncryptWriter::new(Vec::new(), Algorithm::Aes, aes_cbc());
    let sink = encrypt_all(writer, &[&b"first frame"[..], &b"second, longer frame"[..]]);

    // PKCS#7 frames: 11 -> 16 bytes, 20 -> 32 bytes
    assert_eq!(sink.len(), 48);
    let mut cipher = Cipher::aes(aes_cbc());
    assert_eq!(cipher.decrypt(&sink[..16]).unwrap(), b"first frame");
    assert_eq!(cipher.decrypt(&sink[16..]).unwrap(), b"second, longer frame");
}

#[test]
fn test_reader_treats_source_as_one_message() {
    let mut cipher = Cipher::aes(aes_cbc());
    let message = vec![0x5a; 1000];
    let ciphertext = cipher.encrypt(&message).unwrap();

    let mut reader = DecryptReader::new(ChunkedReader::new(ciphertext, 7), Algorithm::Aes, aes_cbc());
    assert_eq!(decrypt_all(&mut reader, 100), message);
    assert_eq!(reader.buffered(), 0);
}

#[test]
fn test_stream_cipher_survives_arbitrary_chunking() {
    let message: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    let expected = Cipher::chacha20(chacha()).encrypt(&message).unwrap();

    let pieces: Vec<&[u8]> = message.chunks(97).collect();
    let writer = EncryptWriter::new(Vec::new(), Algorithm::ChaCha20, chacha());
    assert_eq!(encrypt_all(writer, &pieces), expected);

    let mut reader = DecryptReader::new(ChunkedReader::new(expected, 13), Algorithm::ChaCha20, chacha());
    assert_eq!(decrypt_all(&mut reader, 64), message);
}

#[test]
fn test_partial_sink_failure_is_recorded() {
    let sink = FailingWriter::new(20, io::ErrorKind::BrokenPipe);
    let mut writer = EncryptWriter::new(sink, Algorithm::Aes, aes_cbc());

    // 16-byte frame fits, the next one is cut off after 4 bytes
    assert_eq!(writer.write(b"short").unwrap(), 5);
    let err = writer.write(b"does not fit").unwrap_err();
    assert!(matches!(err, Error::Write { kind: io::ErrorKind::BrokenPipe, .. }));

    assert_eq!(writer.write(b"x"), Err(err.clone()));
    assert_eq!(writer.close(), Err(err));
    assert_eq!(writer.get_ref().written().len(), 20);
}

#[test]
fn test_close_flushes_and_propagates_flush_failure() {
    let mut writer = EncryptWriter::new(TrackingWriter::default(), Algorithm::ChaCha20, chacha());
    writer.write(b"abc").unwrap();
    writer.close().unwrap();
    assert_eq!(writer.get_ref().flushes, 1);
    assert_eq!(writer.get_ref().writes, 1);

    let sink = TrackingWriter {
        fail_flush: true,
        ..TrackingWriter::default()
    };
    let mut writer = EncryptWriter::new(sink, Algorithm::ChaCha20, chacha());
    let err = writer.close().unwrap_err();
    assert!(matches!(err, Error::Write { kind: io::ErrorKind::Other, .. }));
    assert!(!writer.is_closed());
}

#[test]
fn test_block_source_failure_is_recorded() {
    let mut reader = DecryptReader::new(
        FailingReader::new(vec![0u8; 16], io::ErrorKind::ConnectionAborted),
        Algorithm::Aes,
        aes_cbc(),
    );
    let err = reader.read(&mut [0u8; 32]).unwrap_err();
    assert!(matches!(err, Error::Read { kind: io::ErrorKind::ConnectionAborted, .. }));
    assert_eq!(reader.read(&mut [0u8; 32]), Err(err));
}

#[test]
fn test_keystream_source_failure_passes_through() {
    let ciphertext = Cipher::chacha20(chacha()).encrypt(b"abcdef").unwrap();
    let mut reader = DecryptReader::new(
        FailingReader::new(ciphertext, io::ErrorKind::TimedOut),
        Algorithm::ChaCha20,
        chacha(),
    );

    let mut buf = [0u8; 16];
    assert_eq!(reader.read(&mut buf).unwrap(), 6);
    assert_eq!(&buf[..6], b"abcdef");
    assert!(matches!(reader.read(&mut buf), Err(Error::Read { kind: io::ErrorKind::TimedOut, .. })));
}

#[test]
fn test_io_copy_through_adapters() {
    let message = vec![0xc3u8; 50_000];

    let mut writer = EncryptWriter::new(Vec::new(), Algorithm::ChaCha20, chacha());
    io::copy(&mut Cursor::new(&message), &mut writer).unwrap();
    let ciphertext = writer.finalize().unwrap();

    let mut reader = DecryptReader::new(Cursor::new(ciphertext), Algorithm::ChaCha20, chacha());
    let mut plaintext = Vec::new();
    io::copy(&mut reader, &mut plaintext).unwrap();
    assert_eq!(plaintext, message);
}

#[test]
fn test_helpers_with_gcm() {
    let config = CipherConfig::new(Mode::Gcm, &[9u8; 32])
        .with_iv(&[1u8; 12])
        .with_aad(b"v1");
    let message = b"authenticated streaming payload".repeat(500);

    let ciphertext = encrypt_stream(ChunkedReader::new(message.clone(), 333), Vec::new(), Algorithm::Aes, config.clone()).unwrap();
    assert_eq!(ciphertext.len(), message.len() + 16);

    let mut plaintext = Vec::new();
    let n = decrypt_stream(Cursor::new(&ciphertext), &mut plaintext, Algorithm::Aes, config.clone()).unwrap();
    assert_eq!(n as usize, message.len());
    assert_eq!(plaintext, message);

    let mut tampered = ciphertext;
    tampered[0] ^= 1;
    let err = decrypt_stream(Cursor::new(tampered), io::sink(), Algorithm::Aes, config).unwrap_err();
    assert!(err.is_authentication());
}
