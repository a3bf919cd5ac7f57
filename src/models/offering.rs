//! Raw course-offering record.
//!
//! One scheduled section as scraped from the registration system,
//! before any relation derivation. All scraped fields are kept as
//! free text; numeric interpretation (seat counts, course numbers)
//! happens lazily through accessor methods so that malformed source
//! values degrade to defaults instead of failing the batch.

use serde::{Deserialize, Serialize};

/// A raw scheduled section for one term.
///
/// CRNs are unique within a term but may be empty for malformed rows;
/// such rows are still normalized and classified, but excluded from
/// crosslist and conflict relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOffering {
    /// Term code (e.g. "202610").
    #[serde(default)]
    pub term: String,
    /// College code.
    #[serde(default)]
    pub college: String,
    /// Subject code (e.g. "COMP").
    #[serde(default)]
    pub subject: String,
    /// Course reference number, unique within a term. May be empty.
    #[serde(default)]
    pub crn: String,
    /// Course identifier, subject + number free text (e.g. "COMP 1101").
    #[serde(default)]
    pub course: String,
    /// Section identifier (e.g. "1", "2", "H1").
    #[serde(default)]
    pub section: String,
    /// Section title.
    #[serde(default)]
    pub title: String,
    /// Course-type label (e.g. "Lecture", "Online/Distance").
    #[serde(default)]
    pub course_type: String,
    /// Meeting-dates text (e.g. "05-Jan-2026 to 13-Mar-2026").
    #[serde(default)]
    pub meeting_dates: String,
    /// Time-range text (e.g. "10:00AM-11:50AM").
    #[serde(default)]
    pub time: String,
    /// Day tokens (e.g. "M,W" or "MW").
    #[serde(default)]
    pub days: String,
    /// Weekly-hours text.
    #[serde(default)]
    pub hours: String,
    /// Room text.
    #[serde(default)]
    pub room: String,
    /// Instructor name(s), free text.
    #[serde(default)]
    pub instructor: String,
    /// Seat capacity, text-encoded integer.
    #[serde(default)]
    pub seats: String,
    /// Enrolled count, text-encoded integer.
    #[serde(default)]
    pub enrolled: String,
}

impl CourseOffering {
    /// Creates an offering for the given term and CRN.
    pub fn new(term: impl Into<String>, crn: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            crn: crn.into(),
            ..Self::default()
        }
    }

    /// Sets the college code.
    pub fn with_college(mut self, college: impl Into<String>) -> Self {
        self.college = college.into();
        self
    }

    /// Sets the subject code.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the course identifier.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    /// Sets the section identifier.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Sets the section title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the course-type label.
    pub fn with_course_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = course_type.into();
        self
    }

    /// Sets the meeting-dates text.
    pub fn with_meeting_dates(mut self, meeting_dates: impl Into<String>) -> Self {
        self.meeting_dates = meeting_dates.into();
        self
    }

    /// Sets the time-range text.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets the day tokens.
    pub fn with_days(mut self, days: impl Into<String>) -> Self {
        self.days = days.into();
        self
    }

    /// Sets the weekly-hours text.
    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = hours.into();
        self
    }

    /// Sets the room text.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the instructor name(s).
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the seat capacity text.
    pub fn with_seats(mut self, seats: impl Into<String>) -> Self {
        self.seats = seats.into();
        self
    }

    /// Sets the enrolled-count text.
    pub fn with_enrolled(mut self, enrolled: impl Into<String>) -> Self {
        self.enrolled = enrolled.into();
        self
    }

    /// Seat capacity coerced to an integer. Non-numeric text → 0.
    pub fn seat_count(&self) -> u32 {
        to_count(&self.seats)
    }

    /// Enrolled count coerced to an integer. Non-numeric text → 0.
    pub fn enrolled_count(&self) -> u32 {
        to_count(&self.enrolled)
    }

    /// Course number extracted from the course identifier.
    ///
    /// Takes the first run of three or more consecutive digits
    /// (e.g. "COMP 1101" → 1101). `None` if no such run exists.
    pub fn course_number(&self) -> Option<u32> {
        let bytes = self.course.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_digit() {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                if i - start >= 3 {
                    return self.course[start..i].parse().ok();
                }
            } else {
                i += 1;
            }
        }
        None
    }

    /// Whether this row carries a usable CRN.
    pub fn has_crn(&self) -> bool {
        !self.crn.trim().is_empty()
    }
}

/// Coerces a text-encoded count to an integer, defaulting to 0.
pub(crate) fn to_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_coercion() {
        let o = CourseOffering::new("202610", "12345")
            .with_seats("30")
            .with_enrolled("n/a");
        assert_eq!(o.seat_count(), 30);
        assert_eq!(o.enrolled_count(), 0);
    }

    #[test]
    fn test_course_number() {
        let o = CourseOffering::new("202610", "12345").with_course("COMP 1101");
        assert_eq!(o.course_number(), Some(1101));

        let o = CourseOffering::new("202610", "12345").with_course("COMP 42");
        assert_eq!(o.course_number(), None); // run too short

        let o = CourseOffering::new("202610", "12345").with_course("Directed Study");
        assert_eq!(o.course_number(), None);
    }

    #[test]
    fn test_course_number_skips_short_runs() {
        // First long-enough run wins, not the first digits seen.
        let o = CourseOffering::new("202610", "12345").with_course("A1 B 3550-01");
        assert_eq!(o.course_number(), Some(3550));
    }

    #[test]
    fn test_serde_round_trip() {
        let o = CourseOffering::new("202610", "12345")
            .with_course("COMP 1101")
            .with_instructor("Smith, J.");
        let json = serde_json::to_string(&o).unwrap();
        let back: CourseOffering = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);
    }
}
