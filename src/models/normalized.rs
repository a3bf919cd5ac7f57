//! Normalized schedule fields.
//!
//! The canonical forms of a row's time, day, and date text, nested
//! under `normalized` in the serialized output record. Unparseable
//! source text leaves the corresponding block empty rather than
//! guessing a default.

use serde::{Deserialize, Serialize};

use crate::models::CourseOffering;
use crate::normalize;

/// Normalized meeting time.
///
/// `start_minutes`/`end_minutes` are minutes since midnight; the
/// `*_24` strings are the same instants as `"HH:MM"`. All four are
/// empty/`None` when the time text did not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTime {
    /// Start as 24-hour "HH:MM", empty if unparsed.
    pub start_24: String,
    /// End as 24-hour "HH:MM", empty if unparsed.
    pub end_24: String,
    /// Start in minutes since midnight.
    pub start_minutes: Option<u16>,
    /// End in minutes since midnight.
    pub end_minutes: Option<u16>,
}

/// Normalized meeting days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDays {
    /// Upper-cased day tokens in original order.
    pub list: Vec<String>,
    /// Tokens concatenated for display (e.g. "MW").
    pub canonical: String,
}

/// Normalized meeting date range, ISO-8601 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDates {
    /// First meeting date, empty if unparsed.
    pub start: String,
    /// Last meeting date, empty if unparsed.
    pub end: String,
}

/// The full normalized block for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    /// Normalized time range.
    pub time: NormalizedTime,
    /// Normalized day set.
    pub days: NormalizedDays,
    /// Normalized date range.
    pub dates: NormalizedDates,
}

impl Normalized {
    /// Derives the normalized block from an offering's raw fields.
    pub fn of(offering: &CourseOffering) -> Self {
        let time = match normalize::parse_time_range(&offering.time) {
            Some((start, end)) => NormalizedTime {
                start_24: normalize::format_24(start),
                end_24: normalize::format_24(end),
                start_minutes: Some(start),
                end_minutes: Some(end),
            },
            None => NormalizedTime::default(),
        };

        let list = normalize::parse_days(&offering.days);
        let days = NormalizedDays {
            canonical: list.concat(),
            list,
        };

        let dates = match normalize::parse_date_range(&offering.meeting_dates) {
            Some((start, end)) => NormalizedDates {
                start: start.to_string(),
                end: end.to_string(),
            },
            None => NormalizedDates::default(),
        };

        Self { time, days, dates }
    }

    /// The parsed time range, if both endpoints parsed.
    pub fn time_range(&self) -> Option<normalize::TimeRange> {
        Some((self.time.start_minutes?, self.time.end_minutes?))
    }
}
