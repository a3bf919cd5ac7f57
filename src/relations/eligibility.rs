//! GTA-eligibility classification.
//!
//! A section can be staffed by a graduate teaching assistant when it
//! has open seats and is a taught format (lecture, lab, or an
//! online/distance delivery). Pure function of the raw row; the flag
//! never depends on the scheduling relations.

use crate::models::CourseOffering;

/// Course-type markers (lower-cased substring match) that admit GTA
/// staffing.
const ELIGIBLE_TYPE_MARKERS: [&str; 4] = ["lecture", "lab", "online", "distance"];

/// Whether a section is a candidate for GTA staffing.
///
/// True iff seat capacity is strictly positive (non-numeric text
/// counts as zero) and the course-type text contains at least one
/// eligible marker, case-insensitively.
pub fn is_gta_eligible(offering: &CourseOffering) -> bool {
    if offering.seat_count() == 0 {
        return false;
    }
    let course_type = offering.course_type.to_lowercase();
    ELIGIBLE_TYPE_MARKERS
        .iter()
        .any(|marker| course_type.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(seats: &str, course_type: &str) -> CourseOffering {
        CourseOffering::new("202610", "12345")
            .with_seats(seats)
            .with_course_type(course_type)
    }

    #[test]
    fn test_requires_open_seats() {
        assert!(!is_gta_eligible(&offering("0", "Lecture")));
        assert!(!is_gta_eligible(&offering("", "Lecture")));
        assert!(is_gta_eligible(&offering("30", "Lecture")));
    }

    #[test]
    fn test_requires_eligible_course_type() {
        assert!(!is_gta_eligible(&offering("30", "Seminar")));
        assert!(!is_gta_eligible(&offering("30", "")));
        assert!(is_gta_eligible(&offering("30", "Online/Distance")));
        assert!(is_gta_eligible(&offering("30", "Lecture/Lab")));
        assert!(is_gta_eligible(&offering("30", "LAB")));
    }

    #[test]
    fn test_non_numeric_seats_count_as_zero() {
        assert!(!is_gta_eligible(&offering("full", "Lecture")));
    }
}
