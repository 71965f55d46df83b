//! Lenient `date_taken` parsing.
//!
//! # Invariants
//! - Values without an offset are read as UTC.
//! - Parsed values compare by absolute instant, not by text.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: [&str; 7] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    // `Date#toString` output, e.g. `Sun Jun 26 2016 12:36:06 GMT-0800`.
    "%a %b %d %Y %H:%M:%S GMT%z",
];

const NAIVE_DATE_TIME_FORMATS: [&str; 9] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%a %b %d %Y %H:%M:%S",
];

const NAIVE_DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Parses a feed date such as `2016-06-26T12:36:06-08:00`.
///
/// Accepts:
/// - RFC 3339 and RFC 2822.
/// - ISO date-times with or without offset (`T` or space separated,
///   optional seconds and fractional seconds, trailing `Z`).
/// - Reduced ISO dates `YYYY` and `YYYY-MM`; the missing month or day is `01`.
/// - Month-name dates such as `Jun 26 2016` or `June 26, 2016 12:00:00`.
/// - `Date#toString` output such as `Sun Jun 26 2016 12:36:06 GMT-0800 (PST)`.
///
/// Values without an offset, including date-times, are read as UTC. A
/// JavaScript `Date` reads offset-less date-times in the host's local zone,
/// so orderings can differ near midnight when records mix offset and
/// offset-less values.
///
/// Returns `None` when no format matches.
pub fn parse_date_taken(value: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = strip_zone_name(value.trim());
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed);
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }

    let naive = trimmed
        .strip_suffix(['Z', 'z'])
        .unwrap_or(trimmed)
        .trim_end();
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(parsed.and_utc().fixed_offset());
        }
    }

    let date = NAIVE_DATE_FORMATS
        .into_iter()
        .find_map(|format| NaiveDate::parse_from_str(naive, format).ok())
        .or_else(|| parse_reduced_iso_date(naive))?;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().fixed_offset())
}

/// `YYYY` or `YYYY-MM`.
fn parse_reduced_iso_date(value: &str) -> Option<NaiveDate> {
    let (year, month) = match value.split_once('-') {
        Some((year, month)) if month.len() == 2 => (year, month),
        Some(_) => return None,
        None => (value, "01"),
    };
    if year.len() != 4 || !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if !month.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Drops a trailing ` (Pacific Daylight Time)` style zone name.
fn strip_zone_name(value: &str) -> &str {
    match value.strip_suffix(')').and_then(|rest| rest.rfind(" (")) {
        Some(open) => value[..open].trim_end(),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_date_taken;

    #[test]
    fn parses_feed_format_with_offset() {
        let parsed = parse_date_taken("2016-06-26T12:36:06-08:00").unwrap();
        assert_eq!(parsed.timestamp(), 1_466_973_366);
    }

    #[test]
    fn offsets_are_compared_as_instants() {
        let west = parse_date_taken("2016-06-26T01:00:00-08:00").unwrap();
        let east = parse_date_taken("2016-06-26T05:00:00+00:00").unwrap();
        assert!(east < west);
    }

    #[test]
    fn accepts_space_separator_and_fraction() {
        assert!(parse_date_taken("2016-06-26 12:36:06.250").is_some());
        assert!(parse_date_taken("2016-06-26T12:36:06Z").is_some());
    }

    #[test]
    fn naive_values_are_utc() {
        let naive = parse_date_taken("2016-06-26 00:00:00").unwrap();
        let date_only = parse_date_taken("2016-06-26").unwrap();
        assert_eq!(naive, date_only);
        assert_eq!(date_only.offset().local_minus_utc(), 0);
    }

    #[test]
    fn accepts_rfc2822() {
        let parsed = parse_date_taken("Sun, 26 Jun 2016 12:36:06 -0800").unwrap();
        assert_eq!(parsed.timestamp(), 1_466_973_366);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date_taken("yesterday-ish").is_none());
        assert!(parse_date_taken("").is_none());
        assert!(parse_date_taken("2016-13-40").is_none());
    }

    #[test]
    fn accepts_reduced_iso_dates() {
        let month = parse_date_taken("2016-06").unwrap();
        assert_eq!(month, parse_date_taken("2016-06-01").unwrap());
        let year = parse_date_taken("2016").unwrap();
        assert_eq!(year, parse_date_taken("2016-01-01").unwrap());
        assert!(parse_date_taken("2016-13").is_none());
        assert!(parse_date_taken("16").is_none());
    }

    #[test]
    fn accepts_minutes_only_times_with_zone() {
        let utc = parse_date_taken("2016-06-26T12:36Z").unwrap();
        assert_eq!(utc.timestamp(), 1_466_944_560);
        let pacific = parse_date_taken("2016-06-26T12:36-08:00").unwrap();
        assert_eq!(pacific.timestamp(), 1_466_973_360);
    }

    #[test]
    fn accepts_month_name_dates() {
        let short = parse_date_taken("Jun 26 2016").unwrap();
        assert_eq!(short, parse_date_taken("2016-06-26").unwrap());
        let long = parse_date_taken("June 26, 2016 12:00:00").unwrap();
        assert_eq!(long, parse_date_taken("2016-06-26T12:00:00Z").unwrap());
    }

    #[test]
    fn accepts_date_to_string_output() {
        let bare = parse_date_taken("Sun Jun 26 2016 12:36:06 GMT-0800").unwrap();
        assert_eq!(bare.timestamp(), 1_466_973_366);
        let named =
            parse_date_taken("Sun Jun 26 2016 12:36:06 GMT-0800 (Pacific Standard Time)").unwrap();
        assert_eq!(named, bare);
    }
}
