//! String comparison helpers built on the canonical hasher.
//!
//! [`compare_strings`] is order-sensitive: it hashes the UTF-8 bytes as given.
//! [`compare_as_set`] first splits each string on whitespace, sorts the tokens and joins them
//! with single spaces, so two strings holding the same multiset of words score 128.
//!
//! ```rust
//! use nilsimsa::text::{compare_as_set, compare_strings};
//!
//! let a = "The plains in Spain in the falls rain mainly";
//! let b = "The rain in Spain falls mainly in the plains";
//! assert_eq!(compare_strings(a, b), 84);
//! assert_eq!(compare_as_set(a, b), 128);
//! ```
//!
//! # Notes
//!
//! - Tokens are sorted by byte order (`str::cmp`), so case matters.
//! - Leading/trailing whitespace never produces empty tokens.

use crate::hasher::digest;

/// Similarity score of two strings hashed as UTF-8 bytes.
pub fn compare_strings(a: &str, b: &str) -> i32 {
    let score = digest(a).compare(&digest(b));
    tracing::debug!(score, "compared strings");
    score
}

/// Similarity score of two strings after sorting their whitespace-separated tokens.
pub fn compare_as_set(a: &str, b: &str) -> i32 {
    let score = digest(sorted_tokens(a)).compare(&digest(sorted_tokens(b)));
    tracing::debug!(score, "compared token sets");
    score
}

/// Whitespace tokens of `text`, sorted and joined by single spaces.
pub fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
