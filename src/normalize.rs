//! Field normalization: time ranges, day tokens, date ranges.
//!
//! Pure parsers over the free-text schedule fields of a scraped row.
//! Every parser returns "no result" (`None` or an empty list) for
//! input it cannot interpret — malformed source data never raises.
//!
//! # Formats
//!
//! | Field | Shape | Example |
//! |-------|-------|---------|
//! | Time  | `H:MMAM-H:MMPM` (case-insensitive) | `10:00AM-11:50AM` |
//! | Days  | comma/whitespace-separated tokens | `M,W` / `T R` |
//! | Dates | `DD-Mon-YYYY to DD-Mon-YYYY` | `05-Jan-2026 to 13-Mar-2026` |

use chrono::NaiveDate;

/// A meeting time range in minutes since midnight, half-open `[start, end)`.
pub type TimeRange = (u16, u16);

/// Parses a time-range string like `"10:00AM-11:50AM"`.
///
/// AM/PM markers are case-insensitive and a leading hour zero is
/// optional. Returns `None` if either endpoint fails to parse or if
/// the end is not strictly after the start.
pub fn parse_time_range(text: &str) -> Option<TimeRange> {
    let (start_tok, end_tok) = text.trim().split_once('-')?;
    let start = parse_clock(start_tok)?;
    let end = parse_clock(end_tok)?;
    if end > start {
        Some((start, end))
    } else {
        None
    }
}

/// Parses one `H:MMAM` / `HH:MMPM` endpoint to minutes since midnight.
fn parse_clock(token: &str) -> Option<u16> {
    let tok = token.trim().to_ascii_uppercase();
    let (clock, pm) = match tok.strip_suffix("AM") {
        Some(rest) => (rest.trim_end().to_string(), false),
        None => (tok.strip_suffix("PM")?.trim_end().to_string(), true),
    };
    let (hour_part, minute_part) = clock.split_once(':')?;
    if hour_part.is_empty()
        || hour_part.len() > 2
        || minute_part.len() != 2
        || !hour_part.bytes().all(|b| b.is_ascii_digit())
        || !minute_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let hour: u16 = hour_part.parse().ok()?;
    let minute: u16 = minute_part.parse().ok()?;
    if minute > 59 {
        return None;
    }
    // 12-hour to 24-hour: 12 wraps to 0, PM adds 12 hours.
    let hour24 = hour % 12 + if pm { 12 } else { 0 };
    Some(hour24 * 60 + minute)
}

/// Whether two half-open time ranges overlap.
///
/// Back-to-back meetings (one ends exactly when the other starts)
/// do not overlap.
#[inline]
pub fn ranges_overlap(a: TimeRange, b: TimeRange) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// Splits a days string into upper-cased tokens, original order kept.
///
/// Tokens are separated by commas and/or whitespace; empty input
/// yields an empty list.
pub fn parse_days(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_uppercase())
        .collect()
}

/// Parses a date-range string like `"05-Jan-2026 to 13-Mar-2026"`.
///
/// Returns `None` on malformed dates or a missing `to` separator.
pub fn parse_date_range(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let mut parts = text.split_whitespace();
    let start_tok = parts.next()?;
    if parts.next()? != "to" {
        return None;
    }
    let end_tok = parts.next()?;
    let start = parse_date(start_tok)?;
    let end = parse_date(end_tok)?;
    Some((start, end))
}

/// Parses one `DD-Mon-YYYY` date token.
fn parse_date(token: &str) -> Option<NaiveDate> {
    // Shape check first: exactly DD-Mon-YYYY, three-letter month.
    let mut fields = token.split('-');
    let (day, month, year) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some()
        || day.len() != 2
        || month.len() != 3
        || year.len() != 4
        || !month.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return None;
    }
    NaiveDate::parse_from_str(token, "%d-%b-%Y").ok()
}

/// Formats minutes-since-midnight as a 24-hour `"HH:MM"` string.
pub fn format_24(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_range() {
        assert_eq!(parse_time_range("10:00AM-11:50AM"), Some((600, 710)));
        assert_eq!(parse_time_range("1:00PM-2:15PM"), Some((780, 855)));
        assert_eq!(parse_time_range(" 9:00am - 10:50am "), Some((540, 650)));
    }

    #[test]
    fn test_parse_time_range_noon_and_midnight() {
        // 12 wraps to 0 before the PM offset.
        assert_eq!(parse_time_range("12:00PM-1:00PM"), Some((720, 780)));
        assert_eq!(parse_time_range("12:30AM-1:30AM"), Some((30, 90)));
    }

    #[test]
    fn test_parse_time_range_rejects_malformed() {
        assert_eq!(parse_time_range(""), None);
        assert_eq!(parse_time_range("TBA"), None);
        assert_eq!(parse_time_range("10:00-11:50"), None); // no meridiem
        assert_eq!(parse_time_range("10:0AM-11:50AM"), None); // short minutes
        assert_eq!(parse_time_range("10:00AM"), None); // no range
        assert_eq!(parse_time_range("10:75AM-11:50AM"), None);
    }

    #[test]
    fn test_parse_time_range_requires_positive_duration() {
        assert_eq!(parse_time_range("11:50AM-10:00AM"), None);
        assert_eq!(parse_time_range("10:00AM-10:00AM"), None);
    }

    #[test]
    fn test_ranges_overlap_half_open() {
        assert!(ranges_overlap((600, 710), (650, 760)));
        assert!(ranges_overlap((650, 760), (600, 710)));
        // Back-to-back: end of one == start of the other.
        assert!(!ranges_overlap((600, 710), (710, 820)));
        assert!(!ranges_overlap((710, 820), (600, 710)));
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("M,W"), vec!["M", "W"]);
        assert_eq!(parse_days("t r"), vec!["T", "R"]);
        assert_eq!(parse_days("  MW  "), vec!["MW"]);
        assert!(parse_days("").is_empty());
        assert!(parse_days(" , ").is_empty());
    }

    #[test]
    fn test_parse_date_range() {
        let (start, end) = parse_date_range("05-Jan-2026 to 13-Mar-2026").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 3, 13).unwrap());
    }

    #[test]
    fn test_parse_date_range_rejects_malformed() {
        assert_eq!(parse_date_range(""), None);
        assert_eq!(parse_date_range("05-Jan-2026"), None); // no separator
        assert_eq!(parse_date_range("05-Jan-2026 until 13-Mar-2026"), None);
        assert_eq!(parse_date_range("5-Jan-2026 to 13-Mar-2026"), None); // short day
        assert_eq!(parse_date_range("05-January-2026 to 13-Mar-2026"), None);
        assert_eq!(parse_date_range("31-Feb-2026 to 13-Mar-2026"), None);
    }

    #[test]
    fn test_format_24() {
        assert_eq!(format_24(600), "10:00");
        assert_eq!(format_24(710), "11:50");
        assert_eq!(format_24(0), "00:00");
    }
}
