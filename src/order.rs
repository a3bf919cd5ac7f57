//! Deterministic record ordering.
//!
//! Imposes a total order over processed records so that re-runs emit
//! byte-identical output. Full key, ascending:
//!
//! 1. term code (lexical)
//! 2. course number (numeric; unparseable sorts last)
//! 3. section (numeric sections numerically, then alphanumeric
//!    sections lexically)
//! 4. CRN (lexical tiebreak)
//!
//! The term-less variant orders one term's GTA-eligible subset for
//! matrix construction and feed rows.

use crate::models::ProcessedOffering;

/// Sort key for a section identifier.
///
/// Purely numeric sections order numerically and come before
/// alphanumeric sections, which order lexically.
fn section_key(section: &str) -> (u8, u32, String) {
    let trimmed = section.trim();
    match trimmed.parse::<u32>() {
        Ok(n) => (0, n, String::new()),
        Err(_) => (1, 0, trimmed.to_string()),
    }
}

/// Sort key for a course number; unparseable numbers order last.
fn course_key(record: &ProcessedOffering) -> (u8, u32) {
    match record.offering.course_number() {
        Some(n) => (0, n),
        None => (1, 0),
    }
}

/// The ordering key within a single term (no term component).
fn within_term_key(record: &ProcessedOffering) -> ((u8, u32), (u8, u32, String), String) {
    (
        course_key(record),
        section_key(&record.offering.section),
        record.offering.crn.trim().to_string(),
    )
}

/// Sorts the full collection by (term, course number, section, CRN).
pub fn sort(records: &mut [ProcessedOffering]) {
    records.sort_by_key(|r| (r.offering.term.trim().to_string(), within_term_key(r)));
}

/// Sorts one term's subset by (course number, section, CRN).
pub fn sort_within_term(records: &mut [&ProcessedOffering]) {
    records.sort_by_key(|r| within_term_key(r));
}
