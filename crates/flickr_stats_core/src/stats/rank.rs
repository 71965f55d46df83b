//! Tag frequency ranking.
//!
//! # Ordering
//! 1. Tokens are grouped in emission order: canonical array-index tokens
//!    (`"0"`, `"7"`, `"2016"`, ...) ascending by numeric value, then every
//!    other token by first occurrence.
//! 2. Groups are stable-sorted by ascending frequency.
//! 3. The whole table is reversed.
//!
//! Equal frequencies therefore come out in reverse emission order. Rankings
//! published against this crate depend on that tie order.

use super::extract::flickr_tags;
use super::{StatsError, StatsResult};
use crate::model::photo::PhotoRecord;
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

/// One distinct tag token with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFrequency {
    pub tag: String,
    pub frequency: usize,
}

/// Distinct tag tokens, most frequent first.
///
/// Every token counts, including empty and non-alphanumeric ones.
pub fn tag_frequencies(records: &[PhotoRecord]) -> Vec<TagFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    for token in flickr_tags(records) {
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    let (mut index_keys, other_keys): (Vec<String>, Vec<String>) = first_seen
        .into_iter()
        .partition(|token| array_index(token).is_some());
    index_keys.sort_by_key(|token| array_index(token));

    let mut table = index_keys
        .into_iter()
        .chain(other_keys)
        .map(|tag| {
            let frequency = counts.get(&tag).copied().unwrap_or_default();
            TagFrequency { tag, frequency }
        })
        .collect::<Vec<TagFrequency>>();
    table.sort_by_key(|entry| entry.frequency);
    table.reverse();
    table
}

/// Tag at zero-based `rank` of [`tag_frequencies`].
///
/// # Errors
/// - `StatsError::RankOutOfRange` when `rank` is not below the number of
///   distinct tokens.
pub fn tag_at_rank(records: &[PhotoRecord], rank: usize) -> StatsResult<String> {
    let table = tag_frequencies(records);
    let distinct = table.len();
    match table.into_iter().nth(rank) {
        Some(entry) => {
            debug!(
                "event=tag_rank module=stats status=ok rank={} distinct={} frequency={}",
                rank, distinct, entry.frequency
            );
            Ok(entry.tag)
        }
        None => {
            warn!(
                "event=tag_rank module=stats status=error error_code=rank_out_of_range rank={} distinct={}",
                rank, distinct
            );
            Err(StatsError::RankOutOfRange { rank, distinct })
        }
    }
}

/// Fixes `rank` and returns the lookup as a reusable function.
///
/// `common_tag_by_rank(0)` yields the most common tag, `common_tag_by_rank(2)`
/// the third most common.
pub fn common_tag_by_rank(rank: usize) -> impl Fn(&[PhotoRecord]) -> StatsResult<String> {
    move |records: &[PhotoRecord]| tag_at_rank(records, rank)
}

/// Numeric value of a canonical array-index token: decimal, no sign, no
/// leading zero, below `u32::MAX`.
fn array_index(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse::<u32>().ok().filter(|value| *value < u32::MAX)
}
