//! Property-based round trips across algorithms, modes and paddings

use proptest::prelude::*;
use symkit_algorithms::PaddingScheme;
use symkit_symmetric::{Algorithm, Cipher, CipherConfig, EncryptWriter, Mode};

fn key_for(algorithm: Algorithm, seed: u8) -> Vec<u8> {
    vec![seed; algorithm.key_sizes()[0]]
}

fn iv_for(algorithm: Algorithm, mode: Mode, seed: u8) -> Vec<u8> {
    vec![seed; algorithm.nonce_size(mode).unwrap_or(0)]
}

fn supported_pairs() -> Vec<(Algorithm, Mode)> {
    Algorithm::ALL
        .into_iter()
        .flat_map(|a| Mode::ALL.into_iter().map(move |m| (a, m)))
        .filter(|(a, m)| a.supports(*m))
        .collect()
}

proptest! {
    #[test]
    fn round_trip_every_mode(
        pair in prop::sample::select(supported_pairs()),
        seed in any::<u8>(),
        data in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let (algorithm, mode) = pair;
        let config = CipherConfig::new(mode, &key_for(algorithm, seed))
            .with_iv(&iv_for(algorithm, mode, seed.wrapping_add(1)));
        let mut cipher = Cipher::new(algorithm, config);

        let ciphertext = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn lossless_paddings_round_trip(
        padding in prop::sample::select(PaddingScheme::ALL.to_vec()),
        data in prop::collection::vec(any::<u8>(), 1..100),
    ) {
        prop_assume!(padding.adds_padding() && padding.is_lossless());
        let config = CipherConfig::new(Mode::Cbc, &[7u8; 24])
            .with_iv(&[3u8; 8])
            .with_padding(padding);
        let mut cipher = Cipher::triple_des(config);

        let ciphertext = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len() % 8, 0);
        prop_assert!(ciphertext.len() > data.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn pkcs7_padding_law(data in prop::collection::vec(any::<u8>(), 0..64), block in 1usize..=32) {
        let padded = PaddingScheme::Pkcs7.pad(&data, block).unwrap();
        let n = block - data.len() % block;
        prop_assert_eq!(padded.len(), data.len() + n);
        prop_assert!(padded[data.len()..].iter().all(|&b| b as usize == n));
        prop_assert_eq!(PaddingScheme::Pkcs7.unpad(&padded, block).unwrap(), data);
    }

    #[test]
    fn keystream_chunking_is_invisible(
        data in prop::collection::vec(any::<u8>(), 0..500),
        cut in prop::collection::vec(1usize..64, 1..10),
    ) {
        let config = CipherConfig::new(Mode::Ctr, &[1u8; 32]).with_iv(&[2u8; 12]);
        let expected = Cipher::chacha20(config.clone()).encrypt(&data).unwrap();

        let mut writer = EncryptWriter::new(Vec::new(), Algorithm::ChaCha20, config);
        let mut rest = &data[..];
        for size in cut.iter().cycle() {
            if rest.is_empty() {
                break;
            }
            let (head, tail) = rest.split_at((*size).min(rest.len()));
            writer.write(head).unwrap();
            rest = tail;
        }
        prop_assert_eq!(writer.finalize().unwrap(), expected);
    }

    #[test]
    fn gcm_rejects_any_flipped_bit(
        algorithm in prop::sample::select(vec![Algorithm::Aes, Algorithm::Twofish]),
        data in prop::collection::vec(any::<u8>(), 0..64),
        aad in prop::collection::vec(any::<u8>(), 0..32),
        bit in any::<prop::sample::Index>(),
    ) {
        let config = CipherConfig::new(Mode::Gcm, &key_for(algorithm, 5))
            .with_iv(&[6u8; 12])
            .with_aad(&aad);
        let mut cipher = Cipher::new(algorithm, config);

        let mut sealed = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(sealed.len(), data.len() + 16);

        let bit = bit.index(sealed.len() * 8);
        sealed[bit / 8] ^= 1 << (bit % 8);
        let err = cipher.decrypt(&sealed).unwrap_err();
        prop_assert!(err.is_authentication());
    }
}
