//! GTA compatibility matrix.
//!
//! Projects the conflict relation of one term's GTA-eligible sections
//! into a square boolean matrix keyed by CRN: a cell is `true` when
//! the two sections can be covered by the same assistant (no time
//! conflict), `false` when their meetings collide. Symmetric by
//! construction, diagonal always `true`.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::ProcessedOffering;
use crate::order;

/// Symmetric boolean compatibility matrix for one term.
///
/// Rows and columns are indexed by `crns`, ordered by
/// (course number, section, CRN) so re-runs produce identical
/// artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityMatrix {
    /// Term this matrix covers.
    pub term: String,
    /// CRN labels for both axes, in row/column order.
    pub crns: Vec<String>,
    cells: Vec<Vec<bool>>,
}

impl CompatibilityMatrix {
    /// Builds the matrix for one term from processed records.
    ///
    /// Considers only GTA-eligible, CRN-bearing records whose term
    /// matches; everything else is ignored. Cell `(i, j)` is `false`
    /// iff the two CRNs appear in each other's conflict lists.
    pub fn build(term: &str, records: &[ProcessedOffering]) -> Self {
        let mut eligible: Vec<&ProcessedOffering> = records
            .iter()
            .filter(|r| r.offering.term.trim() == term && r.gta_eligible && r.offering.has_crn())
            .collect();
        order::sort_within_term(&mut eligible);

        let crns: Vec<String> = eligible
            .iter()
            .map(|r| r.offering.crn.trim().to_string())
            .collect();
        let conflict_sets: Vec<HashSet<&str>> = eligible
            .iter()
            .map(|r| r.conflict_crns().collect())
            .collect();

        let cells = (0..eligible.len())
            .map(|i| {
                (0..eligible.len())
                    .map(|j| i == j || !conflict_sets[i].contains(crns[j].as_str()))
                    .collect()
            })
            .collect();

        Self {
            term: term.to_string(),
            crns,
            cells,
        }
    }

    /// Number of sections on each axis.
    pub fn len(&self) -> usize {
        self.crns.len()
    }

    /// Whether the term has no eligible sections.
    pub fn is_empty(&self) -> bool {
        self.crns.is_empty()
    }

    /// Compatibility cell by index.
    ///
    /// # Panics
    /// Panics if an index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i][j]
    }

    /// Compatibility cell by CRN pair; `None` if either CRN is not an
    /// axis label.
    pub fn compatible(&self, a: &str, b: &str) -> Option<bool> {
        let i = self.crns.iter().position(|c| c == a)?;
        let j = self.crns.iter().position(|c| c == b)?;
        Some(self.cells[i][j])
    }

    /// Renders the artifact rows: a header row (empty corner cell,
    /// then CRNs) followed by one `[crn, TRUE/FALSE...]` row per CRN.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.len() + 1);
        let mut header = Vec::with_capacity(self.len() + 1);
        header.push(String::new());
        header.extend(self.crns.iter().cloned());
        rows.push(header);

        for (i, crn) in self.crns.iter().enumerate() {
            let mut row = Vec::with_capacity(self.len() + 1);
            row.push(crn.clone());
            row.extend(
                self.cells[i]
                    .iter()
                    .map(|&ok| if ok { "TRUE" } else { "FALSE" }.to_string()),
            );
            rows.push(row);
        }
        rows
    }
}
