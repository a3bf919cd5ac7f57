//! Crosslist grouping and aggregate totals.
//!
//! Sections that meet at the same time, on the same days, with the
//! same instructor, in the same term are one class taught jointly
//! under different course numbers. This module groups such rows,
//! records each member's siblings, marks the lowest-numbered course
//! in each group, and sums seat/enrollment totals across the group.
//!
//! Grouping keys on the *raw* time/days/instructor text, not the
//! normalized forms: joint sections come from the same source row
//! family and match textually, and keying on raw text keeps rows
//! with unparseable times groupable.

use std::collections::HashMap;

use crate::models::CourseOffering;

/// Per-record crosslist annotation, aligned by index with the input
/// batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosslistAnnotation {
    /// Sibling CRNs, lexically sorted and comma-joined. Empty when
    /// the record has no multi-member group.
    pub crosslist: String,
    /// Whether this record carries the group's lowest course number.
    pub lower_crosslist: bool,
    /// Seats summed across the group (own value outside a group, or
    /// when the group sum is zero).
    pub total_seats: u32,
    /// Enrollment summed across the group (same fallback).
    pub total_enrollment: u32,
}

impl CrosslistAnnotation {
    /// The default annotation for an ungrouped record: no siblings,
    /// lowest by definition, totals are the record's own counts.
    fn ungrouped(offering: &CourseOffering) -> Self {
        Self {
            crosslist: String::new(),
            lower_crosslist: true,
            total_seats: offering.seat_count(),
            total_enrollment: offering.enrolled_count(),
        }
    }
}

/// Computes crosslist annotations for a batch.
///
/// Records are grouped by `(term, time, days, instructor)` with every
/// key component non-empty after trimming; a record missing any
/// component stays ungrouped. Group membership crosses no term
/// boundary because the term is part of the key.
///
/// Within a group of two or more members:
/// - each member's `crosslist` lists the other members' CRNs;
/// - `lower_crosslist` is set on members whose parsed course number
///   equals the group minimum, or on every member when no course
///   number parses anywhere in the group;
/// - totals are the group-wide sums, except that a sum of exactly
///   zero falls back to the member's own value (legacy quirk kept
///   for output compatibility).
pub fn annotate(offerings: &[CourseOffering]) -> Vec<CrosslistAnnotation> {
    let mut annotations: Vec<CrosslistAnnotation> = offerings
        .iter()
        .map(CrosslistAnnotation::ungrouped)
        .collect();

    let mut groups: HashMap<(String, String, String, String), Vec<usize>> = HashMap::new();
    for (idx, offering) in offerings.iter().enumerate() {
        let term = offering.term.trim();
        let time = offering.time.trim();
        let days = offering.days.trim();
        let instructor = offering.instructor.trim();
        if term.is_empty() || time.is_empty() || days.is_empty() || instructor.is_empty() {
            continue;
        }
        let key = (
            term.to_string(),
            time.to_string(),
            days.to_string(),
            instructor.to_string(),
        );
        groups.entry(key).or_default().push(idx);
    }

    for members in groups.into_values() {
        if members.len() < 2 {
            continue;
        }

        let mut group_crns: Vec<&str> = Vec::new();
        let mut seat_sum: u32 = 0;
        let mut enrolled_sum: u32 = 0;
        let mut min_number: Option<u32> = None;
        for &idx in &members {
            let offering = &offerings[idx];
            let crn = offering.crn.trim();
            if !crn.is_empty() {
                group_crns.push(crn);
            }
            seat_sum += offering.seat_count();
            enrolled_sum += offering.enrolled_count();
            if let Some(number) = offering.course_number() {
                min_number = Some(min_number.map_or(number, |m| m.min(number)));
            }
        }
        group_crns.sort_unstable();

        for &idx in &members {
            let offering = &offerings[idx];
            let own_crn = offering.crn.trim();
            let siblings: Vec<&str> = group_crns
                .iter()
                .copied()
                .filter(|&crn| crn != own_crn)
                .collect();
            let lower = match min_number {
                None => true,
                Some(min) => offering.course_number() == Some(min),
            };
            annotations[idx] = CrosslistAnnotation {
                crosslist: siblings.join(","),
                lower_crosslist: lower,
                // Zero-sum fallback: an all-zero group keeps per-row values.
                total_seats: if seat_sum != 0 {
                    seat_sum
                } else {
                    offering.seat_count()
                },
                total_enrollment: if enrolled_sum != 0 {
                    enrolled_sum
                } else {
                    offering.enrolled_count()
                },
            };
        }
    }

    annotations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(crn: &str, course: &str, instructor: &str) -> CourseOffering {
        CourseOffering::new("202610", crn)
            .with_course(course)
            .with_time("10:00AM-11:50AM")
            .with_days("MW")
            .with_instructor(instructor)
            .with_seats("10")
            .with_enrolled("5")
    }

    #[test]
    fn test_pair_becomes_siblings() {
        let batch = vec![
            section("11111", "COMP 1101", "Smith, J."),
            section("22222", "COMP 3101", "Smith, J."),
        ];
        let ann = annotate(&batch);
        assert_eq!(ann[0].crosslist, "22222");
        assert_eq!(ann[1].crosslist, "11111");
        assert!(ann[0].lower_crosslist);
        assert!(!ann[1].lower_crosslist);
        assert_eq!(ann[0].total_seats, 20);
        assert_eq!(ann[0].total_enrollment, 10);
        assert_eq!(ann[1].total_seats, 20);
    }

    #[test]
    fn test_sibling_lists_are_sorted() {
        let batch = vec![
            section("33333", "COMP 1101", "Smith, J."),
            section("11111", "COMP 2101", "Smith, J."),
            section("22222", "COMP 3101", "Smith, J."),
        ];
        let ann = annotate(&batch);
        assert_eq!(ann[0].crosslist, "11111,22222");
        assert_eq!(ann[1].crosslist, "22222,33333");
        assert_eq!(ann[2].crosslist, "11111,33333");
    }

    #[test]
    fn test_different_instructor_does_not_group() {
        let batch = vec![
            section("11111", "COMP 1101", "Smith, J."),
            section("22222", "COMP 3101", "Jones, K."),
        ];
        let ann = annotate(&batch);
        assert!(ann[0].crosslist.is_empty());
        assert!(ann[1].crosslist.is_empty());
        assert!(ann[0].lower_crosslist);
        assert!(ann[1].lower_crosslist);
        assert_eq!(ann[0].total_seats, 10);
    }

    #[test]
    fn test_missing_key_component_stays_ungrouped() {
        let mut a = section("11111", "COMP 1101", "Smith, J.");
        a.instructor = String::new();
        let mut b = section("22222", "COMP 3101", "Smith, J.");
        b.instructor = String::new();
        let ann = annotate(&[a, b]);
        assert!(ann[0].crosslist.is_empty());
        assert!(ann[1].crosslist.is_empty());
    }

    #[test]
    fn test_unparseable_course_numbers_all_lowest() {
        let batch = vec![
            section("11111", "Directed Study", "Smith, J."),
            section("22222", "Independent Work", "Smith, J."),
        ];
        let ann = annotate(&batch);
        assert!(ann[0].lower_crosslist);
        assert!(ann[1].lower_crosslist);
    }

    #[test]
    fn test_one_parseable_number_wins() {
        let batch = vec![
            section("11111", "Directed Study", "Smith, J."),
            section("22222", "COMP 3101", "Smith, J."),
        ];
        let ann = annotate(&batch);
        assert!(!ann[0].lower_crosslist); // no number, group has a minimum
        assert!(ann[1].lower_crosslist);
    }

    #[test]
    fn test_zero_sum_fallback_keeps_own_values() {
        let mut a = section("11111", "COMP 1101", "Smith, J.");
        a.seats = "0".into();
        a.enrolled = "0".into();
        let mut b = section("22222", "COMP 3101", "Smith, J.");
        b.seats = "0".into();
        b.enrolled = "0".into();
        let ann = annotate(&[a, b]);
        assert_eq!(ann[0].total_seats, 0);
        assert_eq!(ann[0].total_enrollment, 0);
    }

    #[test]
    fn test_empty_crn_member_absent_from_sibling_lists() {
        let batch = vec![
            section("", "COMP 1101", "Smith, J."),
            section("22222", "COMP 3101", "Smith, J."),
        ];
        let ann = annotate(&batch);
        assert_eq!(ann[0].crosslist, "22222");
        assert!(ann[1].crosslist.is_empty());
        // Totals still sum over the whole group.
        assert_eq!(ann[1].total_seats, 20);
    }
}
