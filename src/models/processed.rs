//! Processed (annotated) course-offering record.
//!
//! The engine's output type: every raw field of the input row plus
//! the derived scheduling-relation fields. Serializes as a flat
//! superset of [`CourseOffering`] so downstream exporters see one
//! record shape.

use serde::{Deserialize, Serialize};

use crate::models::{CourseOffering, Normalized};

/// A fully annotated section record.
///
/// `crosslist` and `conflicts` are comma-joined, lexically sorted CRN
/// lists (empty string when the relation is empty), mirroring the
/// serialized form consumed by exporters. Both relations are
/// symmetric within a term and mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedOffering {
    /// The raw input fields, unchanged.
    #[serde(flatten)]
    pub offering: CourseOffering,
    /// Normalized time/days/dates block.
    pub normalized: Normalized,
    /// Sibling CRNs in this record's crosslist group, comma-joined.
    pub crosslist: String,
    /// Whether this record has the lowest course number in its group.
    #[serde(rename = "lower-crosslist", alias = "lower_crosslist")]
    pub lower_crosslist: bool,
    /// Seat capacity summed across the crosslist group.
    pub total_seats: u32,
    /// Enrollment summed across the crosslist group.
    pub total_enrollment: u32,
    /// Conflicting CRNs in the same term, comma-joined.
    pub conflicts: String,
    /// Whether this section is a candidate for GTA staffing.
    pub gta_eligible: bool,
}

impl ProcessedOffering {
    /// Sibling CRNs as individual tokens.
    pub fn crosslist_crns(&self) -> impl Iterator<Item = &str> {
        split_crns(&self.crosslist)
    }

    /// Conflicting CRNs as individual tokens.
    pub fn conflict_crns(&self) -> impl Iterator<Item = &str> {
        split_crns(&self.conflicts)
    }

    /// Whether this record belongs to a multi-member crosslist group.
    pub fn is_crosslisted(&self) -> bool {
        !self.crosslist.is_empty()
    }

    /// Enrollment carried by crosslist siblings:
    /// `total_enrollment - own enrolled`, floored at zero.
    pub fn crosslisted_enrollment(&self) -> u32 {
        self.total_enrollment
            .saturating_sub(self.offering.enrolled_count())
    }
}

fn split_crns(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(',').filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processed(crosslist: &str, conflicts: &str) -> ProcessedOffering {
        ProcessedOffering {
            offering: CourseOffering::new("202610", "12345").with_enrolled("20"),
            normalized: Normalized::default(),
            crosslist: crosslist.into(),
            lower_crosslist: true,
            total_seats: 0,
            total_enrollment: 50,
            conflicts: conflicts.into(),
            gta_eligible: false,
        }
    }

    #[test]
    fn test_crn_list_accessors() {
        let p = processed("11111,22222", "");
        assert_eq!(p.crosslist_crns().collect::<Vec<_>>(), ["11111", "22222"]);
        assert_eq!(p.conflict_crns().count(), 0);
        assert!(p.is_crosslisted());
    }

    #[test]
    fn test_crosslisted_enrollment_floors_at_zero() {
        let mut p = processed("", "");
        assert_eq!(p.crosslisted_enrollment(), 30);
        p.total_enrollment = 5; // less than own enrolled
        assert_eq!(p.crosslisted_enrollment(), 0);
    }

    #[test]
    fn test_serializes_flat() {
        let p = processed("11111", "33333");
        let v = serde_json::to_value(&p).unwrap();
        // Raw fields flattened alongside derived ones.
        assert_eq!(v["crn"], "12345");
        assert_eq!(v["crosslist"], "11111");
        assert_eq!(v["lower-crosslist"], true);
        assert_eq!(v["normalized"]["time"]["start_24"], "");
        let back: ProcessedOffering = serde_json::from_value(v).unwrap();
        assert_eq!(back, p);
    }
}
