//! Streaming Nilsimsa hasher.
//!
//! Each input byte is combined with up to four previously seen bytes into eight trigrams.
//! Every trigram is mixed through the [`TransitionTable`] into one of 256 buckets, and the
//! bucket counts are thresholded at their mean to produce the 256 digest bits.
//!
//! ```rust
//! use nilsimsa::Nilsimsa;
//!
//! let mut h = Nilsimsa::new();
//! h.update("abcd").update("efgh");
//! assert_eq!(
//!     h.hex_digest(),
//!     "14c8118000000000030800000004042004189020001308014088003280000078"
//! );
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::config::HasherConfig;
use crate::digest::{Digest, DIGEST_LEN};
use crate::error::{Error, Result};
use crate::table::TransitionTable;

/// Trigrams contributed by one byte once a full window of history exists.
const TRIGRAMS_PER_BYTE: u64 = 8;

/// Trigrams missed while the window fills (the first four bytes).
const RAMP_UP_DEFICIT: u64 = 28;

/// Incremental Nilsimsa state.
///
/// Owned and mutated by one caller at a time; the transition table is shared read-only.
#[derive(Clone)]
pub struct Nilsimsa {
    table: Arc<TransitionTable>,
    count: u64,
    acc: [u64; 256],
    /// `window[0]` is the most recent byte, `window[3]` the oldest.
    window: [Option<u8>; 4],
}

impl Nilsimsa {
    /// Hasher over the canonical seed-53 table.
    pub fn new() -> Self {
        Self::with_table(TransitionTable::canonical())
    }

    /// Hasher over a caller-supplied table.
    pub fn with_table(table: Arc<TransitionTable>) -> Self {
        Self {
            table,
            count: 0,
            acc: [0; 256],
            window: [None; 4],
        }
    }

    /// Hasher built from a [`HasherConfig`].
    pub fn with_config(config: HasherConfig) -> Self {
        Self::with_table(config.table())
    }

    /// The table this hasher mixes with.
    pub fn table(&self) -> &Arc<TransitionTable> {
        &self.table
    }

    /// Number of bytes consumed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Feed bytes. May be called any number of times; chunking does not affect the digest.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        let data = data.as_ref();
        for &ch in data {
            self.push(ch);
        }
        tracing::trace!(bytes = data.len(), count = self.count, "nilsimsa update");
        self
    }

    /// Feed `len` bytes of `buffer` starting at `offset`.
    pub fn update_range(&mut self, buffer: &[u8], offset: usize, len: usize) -> Result<&mut Self> {
        let out_of_bounds = Error::OutOfBounds {
            offset,
            len,
            available: buffer.len(),
        };
        let end = offset.checked_add(len).ok_or(out_of_bounds.clone())?;
        let slice = buffer.get(offset..end).ok_or(out_of_bounds)?;
        Ok(self.update(slice))
    }

    #[inline(always)]
    fn push(&mut self, ch: u8) {
        self.count += 1;
        let t = &*self.table;
        let acc = &mut self.acc;
        let w = self.window;

        if let (Some(w0), Some(w1)) = (w[0], w[1]) {
            acc[t.mix(ch, w0, w1, 0) as usize] += 1;

            if let Some(w2) = w[2] {
                acc[t.mix(ch, w0, w2, 1) as usize] += 1;
                acc[t.mix(ch, w1, w2, 2) as usize] += 1;

                if let Some(w3) = w[3] {
                    acc[t.mix(ch, w0, w3, 3) as usize] += 1;
                    acc[t.mix(ch, w1, w3, 4) as usize] += 1;
                    acc[t.mix(ch, w2, w3, 5) as usize] += 1;
                    // Swapped argument order keeps eight trigrams per byte.
                    acc[t.mix(w3, w0, ch, 6) as usize] += 1;
                    acc[t.mix(w3, w2, ch, 7) as usize] += 1;
                }
            }
        }

        self.window = [Some(ch), w[0], w[1], w[2]];
    }

    /// Trigrams observed so far: 0, 0, 0, 1, 4, 12, 20, 28, ...
    fn total_trigrams(&self) -> u64 {
        match self.count {
            0..=2 => 0,
            3 => 1,
            4 => 4,
            n => TRIGRAMS_PER_BYTE * n - RAMP_UP_DEFICIT,
        }
    }

    /// Digest of everything seen so far. Does not reset or alter the state.
    pub fn digest(&self) -> Digest {
        let threshold = self.total_trigrams() / 256;
        let mut code = [0u8; DIGEST_LEN];
        for (i, &bucket) in self.acc.iter().enumerate() {
            if bucket > threshold {
                code[i >> 3] |= 1 << (i & 7);
            }
        }
        code.reverse();
        Digest::from_bytes(code)
    }

    /// [`digest`](Self::digest) as 64 lowercase hex characters.
    pub fn hex_digest(&self) -> String {
        self.digest().to_hex()
    }

    /// Forget all input, keeping the table.
    pub fn reset(&mut self) {
        self.count = 0;
        self.acc = [0; 256];
        self.window = [None; 4];
    }
}

impl Default for Nilsimsa {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Nilsimsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nilsimsa")
            .field("seed", &self.table.seed())
            .field("count", &self.count)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl io::Write for Nilsimsa {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Extend<u8> for Nilsimsa {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for ch in iter {
            self.push(ch);
        }
    }
}

/// Digest of `data` under the canonical table.
pub fn digest(data: impl AsRef<[u8]>) -> Digest {
    Nilsimsa::new().update(data).digest()
}

/// Hex digest of `data` under the canonical table.
pub fn hex_digest(data: impl AsRef<[u8]>) -> String {
    digest(data).to_hex()
}
