//! Count, tag classification, title length and oldest-photo aggregations.
//!
//! # Invariants
//! - `alpha_numeric_tags_uniq` output is lowercase, unique and ascending.
//! - `non_alpha_numeric_tags` keeps token order and duplicates.
//! - `oldest_photo_title` breaks date ties by record order.

use super::date::parse_date_taken;
use super::extract::{flickr_tags, flickr_titles};
use super::{StatsError, StatsResult};
use crate::model::photo::PhotoRecord;
use crate::text::tokens::{compare_strings, is_alpha_numeric};
use log::{debug, warn};
use std::collections::HashSet;

/// Number of records.
pub fn image_count(records: &[PhotoRecord]) -> usize {
    records.len()
}

/// Unique lowercase alphanumeric tag tokens, sorted ascending.
///
/// Empty tokens produced by irregular spacing are alphanumeric and survive
/// as `""`.
pub fn alpha_numeric_tags_uniq(records: &[PhotoRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = flickr_tags(records)
        .into_iter()
        .filter(|token| is_alpha_numeric(token))
        .map(|token| token.to_lowercase())
        .filter(|token| seen.insert(token.clone()))
        .collect::<Vec<String>>();
    unique.sort_by(|a, b| compare_strings(a, b));

    debug!(
        "event=alpha_numeric_tags module=stats status=ok records={} unique_tags={}",
        records.len(),
        unique.len()
    );
    unique
}

/// Tag tokens containing any character outside `[a-zA-Z0-9]`, in token order.
pub fn non_alpha_numeric_tags(records: &[PhotoRecord]) -> Vec<String> {
    flickr_tags(records)
        .into_iter()
        .filter(|token| !is_alpha_numeric(token))
        .collect()
}

/// Mean title length in UTF-16 code units (spaces and punctuation included).
///
/// # Errors
/// - `StatsError::EmptyCollection` for zero records.
pub fn avg_title_length(records: &[PhotoRecord]) -> StatsResult<f64> {
    let titles = flickr_titles(records);
    if titles.is_empty() {
        warn!("event=avg_title_length module=stats status=error error_code=empty_collection");
        return Err(StatsError::EmptyCollection {
            operation: "avg_title_length",
        });
    }

    let total: usize = titles
        .iter()
        .map(|title| title.encode_utf16().count())
        .sum();
    Ok(total as f64 / titles.len() as f64)
}

/// Title of the record with the earliest `date_taken`.
///
/// Every date is parsed before comparison, so one bad value fails the call
/// even when it would not be the minimum.
///
/// # Errors
/// - `StatsError::EmptyCollection` for zero records.
/// - `StatsError::UnparseableDate` for the first unreadable `date_taken`.
pub fn oldest_photo_title(records: &[PhotoRecord]) -> StatsResult<String> {
    let mut oldest = None;
    for (index, record) in records.iter().enumerate() {
        let taken = parse_date_taken(&record.date_taken).ok_or_else(|| {
            warn!(
                "event=oldest_photo module=stats status=error error_code=unparseable_date index={}",
                index
            );
            StatsError::UnparseableDate {
                index,
                value: record.date_taken.clone(),
            }
        })?;
        oldest = match oldest {
            Some((current, _)) if current <= taken => oldest,
            _ => Some((taken, record)),
        };
    }

    oldest
        .map(|(_, record)| record.title.clone())
        .ok_or(StatsError::EmptyCollection {
            operation: "oldest_photo_title",
        })
}

#[cfg(test)]
mod tests {
    use super::{alpha_numeric_tags_uniq, avg_title_length, non_alpha_numeric_tags};
    use crate::model::photo::PhotoRecord;

    fn record(title: &str, tags: &str) -> PhotoRecord {
        PhotoRecord::new(title, tags, "2016-01-01T00:00:00Z")
    }

    #[test]
    fn uniq_keeps_empty_token_from_double_space() {
        let records = vec![record("a", "dog  cat")];
        assert_eq!(alpha_numeric_tags_uniq(&records), vec!["", "cat", "dog"]);
    }

    #[test]
    fn uniq_sorts_digits_before_letters() {
        let records = vec![record("a", "b 2016 A a")];
        assert_eq!(alpha_numeric_tags_uniq(&records), vec!["2016", "a", "b"]);
    }

    #[test]
    fn non_alpha_keeps_duplicates_and_case() {
        let records = vec![record("a", "Café x café"), record("b", "Café")];
        assert_eq!(
            non_alpha_numeric_tags(&records),
            vec!["Café", "café", "Café"]
        );
    }

    #[test]
    fn title_length_counts_utf16_units() {
        let records = vec![record("🐶", ""), record("ab", "")];
        assert_eq!(avg_title_length(&records).unwrap(), 2.0);
    }
}
