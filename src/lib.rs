//! Scheduling-relation engine for scraped course offerings.
//!
//! Takes raw section records for an academic term and derives the
//! relationships among them: crosslist groups (the same class taught
//! jointly under different course numbers), time conflicts, and
//! GTA-staffing eligibility, plus the per-term compatibility matrix
//! and eligible-section feed consumed by downstream exporters.
//! Everything is a deterministic, single-pass transformation of an
//! in-memory batch — acquisition and persistence live elsewhere.
//!
//! # Modules
//!
//! - **`models`**: `CourseOffering` (raw row), `ProcessedOffering`
//!   (annotated output), the `Normalized` schedule block
//! - **`normalize`**: time/day/date parsers and the overlap test
//! - **`relations`**: eligibility, crosslist grouping, conflict
//!   detection
//! - **`order`**: deterministic (term, course, section, CRN) ordering
//! - **`matrix`**: boolean compatibility matrix per term
//! - **`feed`**: reduced GTA-eligible row set per term
//! - **`pipeline`**: runs the stages in their required order
//! - **`validation`**: structural batch checks
//!
//! # Example
//!
//! ```
//! use course_relations::models::CourseOffering;
//! use course_relations::{matrix::CompatibilityMatrix, pipeline, validation};
//!
//! let batch = vec![
//!     CourseOffering::new("202610", "11111")
//!         .with_course("COMP 1101")
//!         .with_course_type("Lecture")
//!         .with_time("10:00AM-11:50AM")
//!         .with_days("MW")
//!         .with_instructor("Smith, J.")
//!         .with_seats("30"),
//!     CourseOffering::new("202610", "22222")
//!         .with_course("COMP 3101")
//!         .with_course_type("Lecture")
//!         .with_time("10:00AM-11:50AM")
//!         .with_days("MW")
//!         .with_instructor("Smith, J.")
//!         .with_seats("15"),
//! ];
//! validation::validate_batch(&batch).expect("well-formed batch");
//!
//! let processed = pipeline::process(batch);
//! assert_eq!(processed[0].crosslist, "22222");
//! assert_eq!(processed[0].total_seats, 45);
//!
//! let matrix = CompatibilityMatrix::build("202610", &processed);
//! assert_eq!(matrix.compatible("11111", "22222"), Some(true));
//! ```
//!
//! # Guarantees
//!
//! Crosslist and conflict relations are symmetric within a term and
//! mutually exclusive; the matrix is symmetric with an all-true
//! diagonal; re-running on the raw fields of a previous run's output
//! reproduces it exactly. Malformed field text degrades a record to
//! empty/zero annotations instead of failing the batch.

pub mod feed;
pub mod matrix;
pub mod models;
pub mod normalize;
pub mod order;
pub mod pipeline;
pub mod relations;
pub mod validation;

pub use feed::{eligible_sections, EligibleSection};
pub use matrix::CompatibilityMatrix;
pub use models::{CourseOffering, ProcessedOffering};
pub use pipeline::process;
pub use validation::{validate_batch, BatchError};
