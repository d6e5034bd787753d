//! Positional string similarity.
//!
//! Two strings are compared character by character at identical indices,
//! case-insensitively. The score is the number of aligned matches divided by
//! the length of the longer string. This is not an edit distance: a single
//! inserted character shifts every later index and can make otherwise
//! identical strings dissimilar ("abc" vs "xabc" scores 0).
//!
//! Lengths and indices count Unicode scalar values, not bytes.

use std::cmp::{max, min};

/// Similarity threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Count the index positions at which `a` and `b` hold the same character,
/// ignoring case.
pub fn positional_matches(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .filter(|&(x, y)| chars_eq_ignore_case(x, y))
        .count()
}

/// The positional similarity ratio of `a` and `b`.
///
/// Returns `None` when both strings are empty, where the ratio is undefined.
pub fn positional_ratio(a: &str, b: &str) -> Option<f64> {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longest = max(len_a, len_b);
    if longest == 0 {
        return None;
    }

    let matches = if min(len_a, len_b) == 0 {
        0
    } else {
        positional_matches(a, b)
    };

    Some(matches as f64 / longest as f64)
}

/// Whether `a` and `b` reach `threshold` positional similarity.
///
/// Two empty strings are never similar.
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    match positional_ratio(a, b) {
        Some(ratio) => ratio >= threshold,
        None => false,
    }
}
