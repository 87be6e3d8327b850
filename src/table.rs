//! Transition tables: the 256-entry substitution box behind the trigram mix.
//!
//! A table is a permutation of `0..=255` generated deterministically from a one-byte seed.
//! Every seed yields a permutation whose entries XOR to zero. Seed 53 is the canonical table;
//! digests built with different seeds live in different digest spaces and should not be
//! compared with each other.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// Seed of the canonical table.
pub const DEFAULT_SEED: u8 = 53;

/// The canonical table, equal to `TransitionTable::generate(53)`.
const TRAN53: [u8; 256] = [
    0x02, 0xD6, 0x9E, 0x6F, 0xF9, 0x1D, 0x04, 0xAB, 0xD0, 0x22, 0x16, 0x1F, 0xD8, 0x73, 0xA1, 0xAC,
    0x3B, 0x70, 0x62, 0x96, 0x1E, 0x6E, 0x8F, 0x39, 0x9D, 0x05, 0x14, 0x4A, 0xA6, 0xBE, 0xAE, 0x0E,
    0xCF, 0xB9, 0x9C, 0x9A, 0xC7, 0x68, 0x13, 0xE1, 0x2D, 0xA4, 0xEB, 0x51, 0x8D, 0x64, 0x6B, 0x50,
    0x23, 0x80, 0x03, 0x41, 0xEC, 0xBB, 0x71, 0xCC, 0x7A, 0x86, 0x7F, 0x98, 0xF2, 0x36, 0x5E, 0xEE,
    0x8E, 0xCE, 0x4F, 0xB8, 0x32, 0xB6, 0x5F, 0x59, 0xDC, 0x1B, 0x31, 0x4C, 0x7B, 0xF0, 0x63, 0x01,
    0x6C, 0xBA, 0x07, 0xE8, 0x12, 0x77, 0x49, 0x3C, 0xDA, 0x46, 0xFE, 0x2F, 0x79, 0x1C, 0x9B, 0x30,
    0xE3, 0x00, 0x06, 0x7E, 0x2E, 0x0F, 0x38, 0x33, 0x21, 0xAD, 0xA5, 0x54, 0xCA, 0xA7, 0x29, 0xFC,
    0x5A, 0x47, 0x69, 0x7D, 0xC5, 0x95, 0xB5, 0xF4, 0x0B, 0x90, 0xA3, 0x81, 0x6D, 0x25, 0x55, 0x35,
    0xF5, 0x75, 0x74, 0x0A, 0x26, 0xBF, 0x19, 0x5C, 0x1A, 0xC6, 0xFF, 0x99, 0x5D, 0x84, 0xAA, 0x66,
    0x3E, 0xAF, 0x78, 0xB3, 0x20, 0x43, 0xC1, 0xED, 0x24, 0xEA, 0xE6, 0x3F, 0x18, 0xF3, 0xA0, 0x42,
    0x57, 0x08, 0x53, 0x60, 0xC3, 0xC0, 0x83, 0x40, 0x82, 0xD7, 0x09, 0xBD, 0x44, 0x2A, 0x67, 0xA8,
    0x93, 0xE0, 0xC2, 0x56, 0x9F, 0xD9, 0xDD, 0x85, 0x15, 0xB4, 0x8A, 0x27, 0x28, 0x92, 0x76, 0xDE,
    0xEF, 0xF8, 0xB2, 0xB7, 0xC9, 0x3D, 0x45, 0x94, 0x4B, 0x11, 0x0D, 0x65, 0xD5, 0x34, 0x8B, 0x91,
    0x0C, 0xFA, 0x87, 0xE9, 0x7C, 0x5B, 0xB1, 0x4D, 0xE5, 0xD4, 0xCB, 0x10, 0xA2, 0x17, 0x89, 0xBC,
    0xDB, 0xB0, 0xE2, 0x97, 0x88, 0x52, 0xF7, 0x48, 0xD3, 0x61, 0x2C, 0x3A, 0x2B, 0xD1, 0x8C, 0xFB,
    0xF1, 0xCD, 0xE4, 0x6A, 0xE7, 0xA9, 0xFD, 0xC4, 0x37, 0xC8, 0xD2, 0xF6, 0xDF, 0x58, 0x72, 0x4E,
];

static CANONICAL: Lazy<Arc<TransitionTable>> = Lazy::new(|| Arc::new(TransitionTable::default()));

/// A seeded permutation of `0..=255` used as a substitution box.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TransitionTable {
    seed: u8,
    tran: [u8; 256],
}

impl TransitionTable {
    /// Generate the table for `seed`.
    ///
    /// For each slot, `j` advances as `j * seed + 1 (mod 256)`, is doubled and folded back
    /// below 256, then bumped past any value already placed. A collision restarts the scan
    /// from slot 0.
    pub fn generate(seed: u8) -> Self {
        let mut tran = [0u8; 256];
        let mut collisions = 0usize;
        let mut j: u32 = 0;
        for i in 0..256 {
            j = (j * seed as u32 + 1) & 255;
            j += j;
            if j > 255 {
                j -= 255;
            }

            let mut k = 0;
            while k < i {
                if j == tran[k] as u32 {
                    j = (j + 1) & 255;
                    k = 0;
                    collisions += 1;
                } else {
                    k += 1;
                }
            }
            tran[i] = j as u8;
        }
        tracing::debug!(seed, collisions, "generated transition table");
        Self { seed, tran }
    }

    /// Checked constructor for seeds coming from a wider integer.
    pub fn try_from_seed(seed: u32) -> Result<Self> {
        let seed = u8::try_from(seed).map_err(|_| Error::InvalidSeed(seed))?;
        Ok(Self::generate(seed))
    }

    /// The canonical seed-53 table, shared process-wide.
    pub fn canonical() -> Arc<Self> {
        CANONICAL.clone()
    }

    /// Seed this table was generated from.
    pub fn seed(&self) -> u8 {
        self.seed
    }

    /// The raw permutation.
    pub fn as_array(&self) -> &[u8; 256] {
        &self.tran
    }

    /// XOR of all entries (zero for every generated table).
    pub fn xor_reduce(&self) -> u8 {
        self.tran.iter().fold(0, |acc, &v| acc ^ v)
    }

    /// True if every value in `0..=255` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; 256];
        for &v in &self.tran {
            if seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    }

    /// Map a trigram `(a, b, c)` in slot `n` (`0..8`) to an accumulator bucket.
    ///
    /// `((T[a + n] ^ T[b] * (2n + 1)) + T[c ^ T[n]]) mod 256`, wrapping throughout.
    #[inline(always)]
    pub fn mix(&self, a: u8, b: u8, c: u8, n: u8) -> u8 {
        debug_assert!(n < 8, "trigram slot out of range");
        let t = &self.tran;
        let lhs = t[a.wrapping_add(n) as usize] ^ t[b as usize].wrapping_mul(2 * n + 1);
        lhs.wrapping_add(t[(c ^ t[n as usize]) as usize])
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tran: TRAN53,
        }
    }
}

impl TryFrom<u32> for TransitionTable {
    type Error = Error;

    fn try_from(seed: u32) -> Result<Self> {
        Self::try_from_seed(seed)
    }
}

impl fmt::Debug for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
