//! Block padding schemes
//!
//! [`PaddingScheme::pad`] extends data to a multiple of the block size and
//! [`PaddingScheme::unpad`] inverts it, rejecting malformed input rather
//! than returning truncated data.
//!
//! Two schemes are lossy by construction and kept that way so existing
//! ciphertexts stay decodable: `Zero` cannot tell trailing zero plaintext
//! bytes from padding, and `Iso10126` never checks its random fill.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};

use crate::error::{Error, Result};

/// Padding scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingScheme {
    /// No padding; data must already be block aligned
    No,
    /// `0x00` fill up to the boundary, nothing when already aligned
    Zero,
    /// PKCS#5, applied at the cipher's block size
    Pkcs5,
    /// PKCS#7: `n` bytes of value `n`
    #[default]
    Pkcs7,
    /// ANSI X.923: zeros then a length byte
    AnsiX923,
    /// ISO/IEC 9797-1 method 2: `0x80` then zeros
    Iso97971,
    /// ISO 10126: random fill then a length byte
    Iso10126,
    /// ISO/IEC 7816-4: `0x80` then zeros
    Iso78164,
    /// One set bit then zeros, at byte granularity
    Bit,
    /// No padding; for modes that accept any length
    Empty,
}

impl PaddingScheme {
    /// Every scheme, in declaration order
    pub const ALL: [PaddingScheme; 10] = [
        PaddingScheme::No,
        PaddingScheme::Zero,
        PaddingScheme::Pkcs5,
        PaddingScheme::Pkcs7,
        PaddingScheme::AnsiX923,
        PaddingScheme::Iso97971,
        PaddingScheme::Iso10126,
        PaddingScheme::Iso78164,
        PaddingScheme::Bit,
        PaddingScheme::Empty,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PaddingScheme::No => "No",
            PaddingScheme::Zero => "Zero",
            PaddingScheme::Pkcs5 => "PKCS5",
            PaddingScheme::Pkcs7 => "PKCS7",
            PaddingScheme::AnsiX923 => "ANSI X.923",
            PaddingScheme::Iso97971 => "ISO 9797-1",
            PaddingScheme::Iso10126 => "ISO 10126",
            PaddingScheme::Iso78164 => "ISO 7816-4",
            PaddingScheme::Bit => "Bit",
            PaddingScheme::Empty => "Empty",
        }
    }

    /// Whether the scheme ever appends bytes
    pub fn adds_padding(&self) -> bool {
        !matches!(self, PaddingScheme::No | PaddingScheme::Empty)
    }

    /// Whether `unpad` can recover the exact input for every plaintext
    pub fn is_lossless(&self) -> bool {
        !matches!(self, PaddingScheme::Zero)
    }

    /// Pads `data` to a multiple of `block_size`
    ///
    /// ISO 10126 fill comes from the operating system RNG.
    pub fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        self.pad_with_rng(data, block_size, &mut OsRng)
    }

    /// Pads `data`, drawing ISO 10126 fill from `rng`
    pub fn pad_with_rng<R: RngCore + CryptoRng>(
        &self,
        data: &[u8],
        block_size: usize,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        let n = block_size - data.len() % block_size;

        let mut out = Vec::with_capacity(data.len() + n);
        out.extend_from_slice(data);
        match self {
            PaddingScheme::No | PaddingScheme::Empty => {}
            PaddingScheme::Zero => {
                if n != block_size {
                    out.resize(data.len() + n, 0);
                }
            }
            PaddingScheme::Pkcs5 | PaddingScheme::Pkcs7 => {
                out.resize(data.len() + n, n as u8);
            }
            PaddingScheme::AnsiX923 => {
                out.resize(data.len() + n - 1, 0);
                out.push(n as u8);
            }
            PaddingScheme::Iso10126 => {
                let start = out.len();
                out.resize(start + n - 1, 0);
                rng.fill_bytes(&mut out[start..]);
                out.push(n as u8);
            }
            PaddingScheme::Iso97971 | PaddingScheme::Iso78164 | PaddingScheme::Bit => {
                out.push(0x80);
                out.resize(data.len() + n, 0);
            }
        }
        Ok(out)
    }

    /// Removes padding added by [`pad`](Self::pad)
    pub fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        let bad = || Error::Padding { scheme: self.name() };

        match self {
            PaddingScheme::No | PaddingScheme::Empty => return Ok(data.to_vec()),
            PaddingScheme::Zero => {
                if data.len() % block_size != 0 {
                    return Err(bad());
                }
                let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                return Ok(data[..end].to_vec());
            }
            _ => {}
        }

        if data.is_empty() || data.len() % block_size != 0 {
            return Err(bad());
        }
        let last_block = &data[data.len() - block_size..];

        let strip = match self {
            PaddingScheme::Pkcs5 | PaddingScheme::Pkcs7 => {
                let n = length_byte(data, block_size).ok_or_else(bad)?;
                let tail = &last_block[block_size - n..];
                let ok = tail
                    .iter()
                    .fold(Choice::from(1), |acc, b| acc & b.ct_eq(&(n as u8)));
                if !bool::from(ok) {
                    return Err(bad());
                }
                n
            }
            PaddingScheme::AnsiX923 => {
                let n = length_byte(data, block_size).ok_or_else(bad)?;
                let fill = &last_block[block_size - n..block_size - 1];
                let ok = fill.iter().fold(Choice::from(1), |acc, b| acc & b.ct_eq(&0));
                if !bool::from(ok) {
                    return Err(bad());
                }
                n
            }
            PaddingScheme::Iso10126 => length_byte(data, block_size).ok_or_else(bad)?,
            PaddingScheme::Iso97971 | PaddingScheme::Iso78164 | PaddingScheme::Bit => {
                let marker = last_block.iter().rposition(|&b| b != 0).ok_or_else(bad)?;
                if last_block[marker] != 0x80 {
                    return Err(bad());
                }
                block_size - marker
            }
            PaddingScheme::No | PaddingScheme::Empty | PaddingScheme::Zero => 0,
        };

        Ok(data[..data.len() - strip].to_vec())
    }
}

/// Reads the trailing length byte, accepting `1..=block_size`
fn length_byte(data: &[u8], block_size: usize) -> Option<usize> {
    let n = usize::from(*data.last()?);
    (1..=block_size).contains(&n).then_some(n)
}

fn check_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 || block_size > 255 {
        return Err(Error::param("block_size", "padding block size must be 1..=255 bytes"));
    }
    Ok(())
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaddingScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let scheme = match key.as_str() {
            "no" | "none" | "nopadding" => PaddingScheme::No,
            "zero" | "zeros" | "zeropadding" => PaddingScheme::Zero,
            "pkcs5" | "pkcs5padding" => PaddingScheme::Pkcs5,
            "pkcs7" | "pkcs7padding" => PaddingScheme::Pkcs7,
            "ansix923" | "x923" => PaddingScheme::AnsiX923,
            "iso97971" | "iso9797" => PaddingScheme::Iso97971,
            "iso10126" => PaddingScheme::Iso10126,
            "iso78164" | "iso7816" => PaddingScheme::Iso78164,
            "bit" | "bitpadding" => PaddingScheme::Bit,
            "empty" => PaddingScheme::Empty,
            _ => return Err(Error::param("padding", format!("unknown padding scheme '{s}'"))),
        };
        Ok(scheme)
    }
}
