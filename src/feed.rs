//! GTA-eligible subset feed.
//!
//! The reduced, ordered view of one term's eligible sections handed
//! to staffing spreadsheets: identity and schedule fields, the
//! seat/enrollment figures, and the derived crosslisted enrollment.
//! Internal bookkeeping fields (`normalized`, `crosslist`,
//! `conflicts`) are deliberately absent.

use serde::{Deserialize, Serialize};

use crate::models::ProcessedOffering;
use crate::order;

/// One feed row for a GTA-eligible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleSection {
    /// Term code.
    pub term: String,
    /// Course reference number.
    pub crn: String,
    /// Course identifier.
    pub course: String,
    /// Section identifier.
    pub section: String,
    /// Section title.
    pub title: String,
    /// Course-type label.
    pub course_type: String,
    /// Meeting-dates text.
    pub meeting_dates: String,
    /// Time-range text.
    pub time: String,
    /// Day tokens.
    pub days: String,
    /// Weekly-hours text.
    pub hours: String,
    /// Room text.
    pub room: String,
    /// Instructor name(s).
    pub instructor: String,
    /// Seat capacity text, as scraped.
    pub seats: String,
    /// Enrolled count text, as scraped.
    pub enrolled: String,
    /// Enrollment carried by crosslist siblings:
    /// `max(total_enrollment - enrolled, 0)`.
    pub crosslisted_enrollment: u32,
    /// Enrollment summed across the crosslist group.
    pub total_enrollment: u32,
}

impl EligibleSection {
    fn from_processed(record: &ProcessedOffering) -> Self {
        let o = &record.offering;
        Self {
            term: o.term.clone(),
            crn: o.crn.clone(),
            course: o.course.clone(),
            section: o.section.clone(),
            title: o.title.clone(),
            course_type: o.course_type.clone(),
            meeting_dates: o.meeting_dates.clone(),
            time: o.time.clone(),
            days: o.days.clone(),
            hours: o.hours.clone(),
            room: o.room.clone(),
            instructor: o.instructor.clone(),
            seats: o.seats.clone(),
            enrolled: o.enrolled.clone(),
            crosslisted_enrollment: record.crosslisted_enrollment(),
            total_enrollment: record.total_enrollment,
        }
    }
}

/// Builds the ordered eligible-section feed for one term.
///
/// Includes only GTA-eligible, CRN-bearing records of the given term,
/// ordered by (course number, section, CRN).
pub fn eligible_sections(term: &str, records: &[ProcessedOffering]) -> Vec<EligibleSection> {
    let mut eligible: Vec<&ProcessedOffering> = records
        .iter()
        .filter(|r| r.offering.term.trim() == term && r.gta_eligible && r.offering.has_crn())
        .collect();
    order::sort_within_term(&mut eligible);
    eligible
        .into_iter()
        .map(EligibleSection::from_processed)
        .collect()
}
