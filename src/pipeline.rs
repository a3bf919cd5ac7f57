//! The relation-derivation pipeline.
//!
//! Runs the fixed stage sequence over a batch of raw offerings:
//!
//! 1. normalize schedule fields
//! 2. classify GTA eligibility
//! 3. group crosslists and sum totals
//! 4. detect per-term time conflicts (needs the sibling lists)
//! 5. order the collection deterministically
//!
//! The matrix and feed artifacts are derived afterwards from the
//! processed collection (see [`crate::matrix`] and [`crate::feed`]).
//!
//! Input records are never mutated; every stage reads the raw fields
//! and earlier annotations and contributes to a fresh output record.
//! Re-running on the raw fields of the output reproduces identical
//! annotations.

use tracing::debug;

use crate::models::{CourseOffering, Normalized, ProcessedOffering};
use crate::order;
use crate::relations::{conflict, crosslist, is_gta_eligible};

/// Derives all scheduling relations for a batch of offerings.
///
/// The batch may span multiple terms; crosslist grouping and conflict
/// detection are term-scoped internally. Malformed field values
/// degrade to empty/zero annotations, never errors — run
/// [`crate::validation::validate_batch`] first to reject a
/// structurally broken batch.
///
/// Returns the annotated records ordered by
/// (term, course number, section, CRN).
pub fn process(offerings: Vec<CourseOffering>) -> Vec<ProcessedOffering> {
    let normalized: Vec<Normalized> = offerings.iter().map(Normalized::of).collect();
    let crosslists = crosslist::annotate(&offerings);
    let conflicts = conflict::annotate(&offerings, &crosslists);

    debug!(
        records = offerings.len(),
        crosslisted = crosslists.iter().filter(|a| !a.crosslist.is_empty()).count(),
        conflicting = conflicts.iter().filter(|c| !c.is_empty()).count(),
        "derived scheduling relations"
    );

    let mut processed: Vec<ProcessedOffering> = offerings
        .into_iter()
        .zip(normalized)
        .zip(crosslists)
        .zip(conflicts)
        .map(|(((offering, normalized), xlist), conflicts)| {
            let gta_eligible = is_gta_eligible(&offering);
            ProcessedOffering {
                offering,
                normalized,
                crosslist: xlist.crosslist,
                lower_crosslist: xlist.lower_crosslist,
                total_seats: xlist.total_seats,
                total_enrollment: xlist.total_enrollment,
                conflicts,
                gta_eligible,
            }
        })
        .collect();

    order::sort(&mut processed);
    processed
}
