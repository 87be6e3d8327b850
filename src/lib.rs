//! `nilsimsa`: the Nilsimsa locality-sensitive hash.
//!
//! Nilsimsa maps a byte stream to a 256-bit digest such that near-duplicate inputs (minor
//! edits, spam variants) produce digests with small Hamming distance, while unrelated inputs
//! produce uncorrelated digests. It is a similarity sketch, not a cryptographic hash.
//!
//! - [`TransitionTable`]: seeded permutation used to mix trigrams into buckets
//! - [`Nilsimsa`]: streaming hasher (feed bytes in any chunking, take a digest at any time)
//! - [`Digest`]: 32-byte digest, hex codec, and `128 - hamming` similarity scoring
//! - [`text`]: order-sensitive and word-set string comparisons
//!
//! ```rust
//! use nilsimsa::{compare, digest};
//!
//! let a = digest("The rain in Spain falls mostly in the plains.");
//! let b = digest("The rain in Spain falls mainly in the plains.");
//! assert_eq!(compare(&a, &a), 128);
//! assert_eq!(compare(&a, &b), 92);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod table;
pub mod text;

pub use config::HasherConfig;
pub use digest::{compare, compare_hex, Digest, DIGEST_LEN, MAX_SCORE};
pub use error::{Error, Result};
pub use hasher::{digest, hex_digest, Nilsimsa};
pub use table::{TransitionTable, DEFAULT_SEED};
