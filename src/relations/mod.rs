//! Scheduling relations over a term's offerings.
//!
//! The three derived relations of the engine:
//!
//! - **`eligibility`**: per-record GTA staffing flag
//! - **`crosslist`**: joint-section grouping with aggregate totals
//! - **`conflict`**: symmetric time-overlap relation, siblings excluded
//!
//! Crosslist annotation must run before conflict detection — the
//! detector consumes sibling lists to exclude joint sections from the
//! conflict relation.

pub mod conflict;
pub mod crosslist;
pub mod eligibility;

pub use crosslist::CrosslistAnnotation;
pub use eligibility::is_gta_eligible;
