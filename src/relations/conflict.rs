//! Time-conflict detection.
//!
//! Two sections conflict when they meet in the same term, their day
//! sets intersect, and their parsed time ranges overlap — unless they
//! are crosslist siblings (the same joint class never conflicts with
//! itself). A row whose time or days fail to parse, or which lacks a
//! CRN, participates in no conflicts.
//!
//! The relation is computed pairwise per term over index-keyed
//! conflict sets, so results are independent of input order and of
//! any record's identity.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::CourseOffering;
use crate::normalize::{self, TimeRange};
use crate::relations::CrosslistAnnotation;

/// Pre-parsed pairing data for one record.
struct Candidate<'a> {
    crn: &'a str,
    time: Option<TimeRange>,
    days: HashSet<String>,
    siblings: HashSet<&'a str>,
}

/// Computes each record's conflict list, aligned by index with the
/// input batch.
///
/// `crosslists` must be the [`crosslist::annotate`] output for the
/// same batch, in the same order; sibling pairs are excluded from the
/// relation. Returned strings are lexically sorted, comma-joined CRN
/// lists (empty when a record has no conflicts).
///
/// [`crosslist::annotate`]: crate::relations::crosslist::annotate
pub fn annotate(
    offerings: &[CourseOffering],
    crosslists: &[CrosslistAnnotation],
) -> Vec<String> {
    debug_assert_eq!(offerings.len(), crosslists.len());

    let mut terms: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, offering) in offerings.iter().enumerate() {
        terms.entry(offering.term.trim()).or_default().push(idx);
    }

    let mut conflict_sets: Vec<BTreeSet<&str>> = vec![BTreeSet::new(); offerings.len()];
    for members in terms.into_values() {
        let candidates: Vec<(usize, Candidate)> = members
            .into_iter()
            .map(|idx| {
                let offering = &offerings[idx];
                let candidate = Candidate {
                    crn: offering.crn.trim(),
                    time: normalize::parse_time_range(&offering.time),
                    days: normalize::parse_days(&offering.days).into_iter().collect(),
                    siblings: crosslists[idx]
                        .crosslist
                        .split(',')
                        .filter(|t| !t.is_empty())
                        .collect(),
                };
                (idx, candidate)
            })
            .collect();

        for (pos, (i, a)) in candidates.iter().enumerate() {
            let Some(time_a) = a.time else { continue };
            if a.days.is_empty() || a.crn.is_empty() {
                continue;
            }
            for (j, b) in candidates[pos + 1..].iter() {
                let Some(time_b) = b.time else { continue };
                if b.crn.is_empty() || b.crn == a.crn {
                    continue;
                }
                if a.days.is_disjoint(&b.days) {
                    continue;
                }
                if !normalize::ranges_overlap(time_a, time_b) {
                    continue;
                }
                if a.siblings.contains(b.crn) || b.siblings.contains(a.crn) {
                    continue;
                }
                conflict_sets[*i].insert(b.crn);
                conflict_sets[*j].insert(a.crn);
            }
        }
    }

    conflict_sets
        .into_iter()
        .map(|set| set.into_iter().collect::<Vec<_>>().join(","))
        .collect()
}
