//! Store-wide consistency rules checked over loaded data.
//!
//! The operations keep these rules on their own; data files edited by hand
//! may not, so `placement check` runs them after a load.

use std::collections::{HashMap, HashSet};

use crate::core::registry::Registry;
use crate::core::types::{MAX_APPLICATIONS, MIN_OFFER_REF, StudentId, score_in_range};

/// Check semantic invariants across both stores:
/// - Offer references are unique and at least `MIN_OFFER_REF`
/// - Filled offers carry no candidates
/// - No candidate appears twice on one offer
/// - No student is a pending candidate on more than `MAX_APPLICATIONS` offers
/// - Student ids are unique
/// - An assigned student points at an existing, filled offer
/// - A filled offer has an assigned student
/// - Grades lie in `[0, 20]`
pub fn validate_invariants(registry: &Registry) -> Vec<String> {
    let mut errors = Vec::new();
    check_offers(registry, &mut errors);
    check_students(registry, &mut errors);
    check_occupants(registry, &mut errors);
    errors
}

fn check_offers(registry: &Registry, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    let mut candidacies: HashMap<StudentId, usize> = HashMap::new();

    for offer in registry.offers().iter() {
        let reference = offer.reference;
        if !seen.insert(reference) {
            errors.push(format!("duplicate offer reference {}", reference));
        }
        if reference < MIN_OFFER_REF {
            errors.push(format!(
                "offer {}: reference below {}",
                reference, MIN_OFFER_REF
            ));
        }
        if offer.filled && !offer.candidates.is_empty() {
            errors.push(format!(
                "offer {}: filled but still lists {} candidate(s)",
                reference,
                offer.candidate_count()
            ));
        }

        let mut on_offer = HashSet::new();
        for id in offer.candidates.iter() {
            if !on_offer.insert(id) {
                errors.push(format!("offer {}: student {} listed twice", reference, id));
                continue;
            }
            *candidacies.entry(id).or_default() += 1;
        }
    }

    let mut overloaded: Vec<(StudentId, usize)> = candidacies
        .into_iter()
        .filter(|(_, count)| *count > MAX_APPLICATIONS)
        .collect();
    overloaded.sort_unstable();
    for (id, count) in overloaded {
        errors.push(format!(
            "student {}: candidate on {} offers (max {})",
            id, count, MAX_APPLICATIONS
        ));
    }
}

fn check_students(registry: &Registry, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for student in registry.students().iter() {
        if !seen.insert(student.id) {
            errors.push(format!("duplicate student id {}", student.id));
        }
        if let Some(reference) = student.assigned {
            match registry.offers().get(reference) {
                None => errors.push(format!(
                    "student {}: assigned to missing offer {}",
                    student.id, reference
                )),
                Some(offer) if !offer.filled => errors.push(format!(
                    "student {}: assigned to offer {} which is not filled",
                    student.id, reference
                )),
                Some(_) => {}
            }
        }
        if !score_in_range(student.grade) {
            errors.push(format!(
                "student {}: grade {:.2} outside [0, 20]",
                student.id, student.grade
            ));
        }
    }
}

fn check_occupants(registry: &Registry, errors: &mut Vec<String>) {
    for offer in registry.offers().list_filled() {
        if registry.students().assigned_to(offer.reference).is_none() {
            errors.push(format!(
                "offer {}: filled but no student is assigned to it",
                offer.reference
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Student;
    use crate::test_support::{offer, offer_with_candidates, registry_with, student};

    #[test]
    fn consistent_registry_has_no_errors() {
        let mut filled = offer(1002, 1);
        filled.filled = true;
        let assigned = Student {
            assigned: Some(1002),
            grade: 14.5,
            ..student(2)
        };
        let registry = registry_with(
            vec![offer_with_candidates(1001, 1, &[1]), filled],
            vec![student(1), assigned],
        );
        assert!(validate_invariants(&registry).is_empty());
    }

    #[test]
    fn filled_offer_without_occupant_is_reported() {
        let mut orphan = offer(1500, 12);
        orphan.filled = true;
        let registry = registry_with(vec![orphan], vec![student(42)]);
        assert_eq!(
            validate_invariants(&registry),
            vec!["offer 1500: filled but no student is assigned to it".to_string()]
        );
    }

    #[test]
    fn reports_every_violation() {
        let mut filled = offer_with_candidates(1002, 1, &[3]);
        filled.filled = true;
        let registry = registry_with(
            vec![
                offer_with_candidates(1001, 1, &[3]),
                filled,
                offer_with_candidates(1001, 2, &[3]),
                offer_with_candidates(999, 2, &[3, 3]),
            ],
            vec![
                Student {
                    assigned: Some(1001),
                    ..student(3)
                },
                Student {
                    assigned: Some(4000),
                    grade: 21.0,
                    ..student(3)
                },
            ],
        );

        let errors = validate_invariants(&registry);
        let has = |needle: &str| errors.iter().any(|err| err.contains(needle));
        assert!(has("duplicate offer reference 1001"));
        assert!(has("offer 999: reference below 1000"));
        assert!(has("offer 1002: filled but still lists"));
        assert!(has("offer 1002: filled but no student is assigned to it"));
        assert!(has("offer 999: student 3 listed twice"));
        assert!(has("student 3: candidate on 4 offers"));
        assert!(has("duplicate student id 3"));
        assert!(has("assigned to missing offer 4000"));
        assert!(has("which is not filled"));
        assert!(has("grade 21.00 outside"));
    }
}
