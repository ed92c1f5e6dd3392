//! Plain-text rendering of records for the role menus.

use crate::core::error::PlacementError;
use crate::core::registry::FilledOffer;
use crate::core::types::{Offer, Student};

pub fn offer_line(offer: &Offer) -> String {
    let status = if offer.filled { "filled" } else { "open" };
    let slots: Vec<String> = offer
        .candidates
        .slots()
        .iter()
        .map(|slot| slot.map_or_else(|| "-".to_string(), |id| id.to_string()))
        .collect();
    format!(
        "offer {} | department {} | {} | {} candidate(s): {}",
        offer.reference,
        offer.department,
        status,
        offer.candidate_count(),
        slots.join(" ")
    )
}

pub fn filled_line(filled: &FilledOffer<'_>) -> String {
    let student = filled
        .student
        .map_or_else(|| "unknown".to_string(), |id| id.to_string());
    format!(
        "offer {} | department {} | student {}",
        filled.offer.reference, filled.offer.department, student
    )
}

pub fn student_line(student: &Student) -> String {
    let assigned = student
        .assigned
        .map_or_else(|| "unassigned".to_string(), |reference| format!("offer {}", reference));
    format!(
        "student {} | {} | grade {:.2}",
        student.id, assigned, student.grade
    )
}

/// Render a list of offers, or a placeholder when it is empty.
pub fn offer_list<'a>(offers: impl IntoIterator<Item = &'a Offer>) -> Vec<String> {
    let lines: Vec<String> = offers.into_iter().map(offer_line).collect();
    if lines.is_empty() {
        return vec!["(no offer)".to_string()];
    }
    lines
}

pub fn refusal(err: &PlacementError) -> String {
    format!("Refused: {}.", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{offer, offer_with_candidates, student};

    #[test]
    fn offer_line_shows_slots() {
        let line = offer_line(&offer_with_candidates(1500, 12, &[42]));
        assert_eq!(
            line,
            "offer 1500 | department 12 | open | 1 candidate(s): 42 - -"
        );
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(offer_list(Vec::<&Offer>::new()), vec!["(no offer)"]);
        assert_eq!(offer_list([&offer(1500, 1)]).len(), 1);
    }

    #[test]
    fn student_line_formats_grade() {
        let line = student_line(&Student {
            assigned: Some(1500),
            grade: 12.0,
            ..student(42)
        });
        assert_eq!(line, "student 42 | offer 1500 | grade 12.00");
    }
}
