//! Nilsimsa digests and their comparison.
//!
//! A digest is 32 bytes (256 bits). Similarity is `128 - hamming_distance`, so identical
//! digests score 128 and bitwise complements score -128.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Digest width in bytes.
pub const DIGEST_LEN: usize = 32;

/// Score of two identical digests.
pub const MAX_SCORE: i32 = 128;

/// Set bits per byte value.
pub(crate) const POPC: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).count_ones() as u8;
        i += 1;
    }
    table
};

/// A 256-bit Nilsimsa digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Digest bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex digest (either case).
    ///
    /// Non-hex characters and wrong lengths are rejected rather than decoded leniently.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut out = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut out)?;
        Ok(Self(out))
    }

    /// Number of differing bits (0..=256).
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| POPC[(a ^ b) as usize] as u32)
            .sum()
    }

    /// Similarity score in `-128..=128`.
    pub fn compare(&self, other: &Self) -> i32 {
        MAX_SCORE - self.hamming_distance(other) as i32
    }
}

/// Similarity score of two digests, `128 - differing bits`.
pub fn compare(a: &Digest, b: &Digest) -> i32 {
    a.compare(b)
}

/// [`compare`] for hex-encoded digests.
pub fn compare_hex(a: &str, b: &str) -> Result<i32> {
    Ok(compare(&a.parse()?, &b.parse()?))
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(d: Digest) -> Self {
        d.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidDigestLength(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}
