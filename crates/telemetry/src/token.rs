//! Token estimation utilities.
//!
//! Uses a character-based heuristic: 1 token ≈ 4 characters, rounded up.
//! This is the ratio the recorded optimization baselines were measured
//! with, so it must not be swapped for a real tokenizer.

/// Estimate the token count for a string.
///
/// Counts UTF-16 code units, the unit the baselines were measured in.
/// Turkish letters such as `ğ` or `ş` count once; characters outside the
/// Basic Multilingual Plane (most emoji) count twice.
pub fn estimate_tokens(text: &str) -> usize {
    text.encode_utf16().count().div_ceil(4)
}
