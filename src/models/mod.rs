//! Course-offering domain models.
//!
//! Input and output record types for the relation-derivation engine.
//! The engine never mutates an input record: each processing pass
//! takes [`CourseOffering`] values and produces new
//! [`ProcessedOffering`] values carrying the derived fields.
//!
//! | Type | Role |
//! |------|------|
//! | `CourseOffering` | Raw scraped section, free-text fields |
//! | `Normalized` | Canonical time/days/dates block |
//! | `ProcessedOffering` | Annotated output record |

mod normalized;
mod offering;
mod processed;

pub use normalized::{Normalized, NormalizedDates, NormalizedDays, NormalizedTime};
pub use offering::CourseOffering;
pub use processed::ProcessedOffering;
