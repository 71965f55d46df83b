//! Token helpers.
//!
//! # Invariants
//! - Tokenization never trims or collapses whitespace: `"a  b"` yields `["a", "", "b"]`.
//! - The empty token is alphanumeric.
//! - Classification is ASCII only; `"świnoujście"` is not alphanumeric.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static NON_ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid non-alphanumeric regex"));

const TOKEN_SEPARATOR: &str = " ";

/// Returns `true` when `token` has no character outside `[a-zA-Z0-9]`.
pub fn is_alpha_numeric(token: &str) -> bool {
    !NON_ALPHANUMERIC_RE.is_match(token)
}

/// Joins tag strings with one space, then splits on every single space.
///
/// An empty input sequence yields one empty token, the same as splitting an
/// empty string.
pub fn combine_string_array<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(TOKEN_SEPARATOR);
    joined.split(TOKEN_SEPARATOR).map(str::to_string).collect()
}

/// Comparator built from strict less-than, usable with `sort_by`.
pub fn compare_strings(a: &str, b: &str) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
