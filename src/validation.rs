//! Structural batch validation.
//!
//! Field-level problems (unparseable times, missing instructors)
//! degrade gracefully inside the pipeline; the only abort-worthy
//! condition is a batch whose shape is wrong. Within this engine
//! that means a CRN appearing twice in the same term — CRNs are the
//! relation keys, so a duplicate makes the derived sibling and
//! conflict lists meaningless for that term.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::CourseOffering;

/// Validation outcome: `Ok(())` or every structural problem found.
pub type BatchResult = Result<(), Vec<BatchError>>;

/// A structural problem with an input batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// The same non-empty CRN appears on two rows of one term.
    #[error("duplicate CRN {crn} in term {term}")]
    DuplicateCrn { term: String, crn: String },
}

/// Checks a batch for structural problems before processing.
///
/// Collects every problem rather than stopping at the first, so a
/// caller can report them all at once. Rows with empty CRNs are
/// always acceptable (they are simply excluded from relations).
pub fn validate_batch(offerings: &[CourseOffering]) -> BatchResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for offering in offerings {
        let crn = offering.crn.trim();
        if crn.is_empty() {
            continue;
        }
        let term = offering.term.trim();
        if !seen.insert((term, crn)) {
            errors.push(BatchError::DuplicateCrn {
                term: term.to_string(),
                crn: crn.to_string(),
            });
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
