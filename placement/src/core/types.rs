//! Record types shared by the offer and student stores.
//!
//! Sentinel encodings used by the data files (`0` for an empty candidate slot,
//! `-1` for an unassigned student, `0/1` for the filled flag) stop at the
//! persistence boundary. In memory they are `Option`s and `bool`s.

use std::fmt;

use crate::core::compact::remove_first;

/// Identifier of an enrolled student.
pub type StudentId = u32;

/// Unique reference of an internship offer.
pub type OfferRef = u32;

/// Department code attached to an offer.
pub type Department = u32;

/// Smallest reference accepted as a real offer record.
pub const MIN_OFFER_REF: OfferRef = 1000;

/// Number of candidate slots on an offer.
pub const MAX_CANDIDATES: usize = 3;

/// Number of offers a single student may be a pending candidate on.
pub const MAX_APPLICATIONS: usize = 3;

/// Inclusive bounds for a grade component and for the final grade.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 20.0;

/// Ordered candidate slots of an offer.
///
/// Slots fill left to right; the candidate count is the number of occupied
/// slots, so it cannot drift from the slot contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    ids: Vec<StudentId>,
}

impl Candidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build slots from stored ids in slot order. Empty ids are skipped and
    /// anything past the last slot is dropped.
    pub fn from_ids(ids: impl IntoIterator<Item = StudentId>) -> Self {
        let ids = ids
            .into_iter()
            .filter(|id| *id != 0)
            .take(MAX_CANDIDATES)
            .collect();
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_CANDIDATES
    }

    pub fn contains(&self, student: StudentId) -> bool {
        self.ids.contains(&student)
    }

    /// Occupy the first empty slot. Returns `false` when every slot is taken.
    pub fn push(&mut self, student: StudentId) -> bool {
        if self.is_full() {
            return false;
        }
        self.ids.push(student);
        true
    }

    /// Remove `student` and shift later slots left.
    pub fn withdraw(&mut self, student: StudentId) -> bool {
        remove_first(&mut self.ids, |id| *id == student).is_some()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.ids.iter().copied()
    }

    /// Fixed three-slot view, `None` for an empty slot.
    pub fn slots(&self) -> [Option<StudentId>; MAX_CANDIDATES] {
        let mut slots = [None; MAX_CANDIDATES];
        for (slot, id) in slots.iter_mut().zip(&self.ids) {
            *slot = Some(*id);
        }
        slots
    }
}

/// One internship position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub reference: OfferRef,
    pub department: Department,
    pub filled: bool,
    pub candidates: Candidates,
}

impl Offer {
    /// A freshly published offer: unfilled, no candidates.
    pub fn new(reference: OfferRef, department: Department) -> Self {
        Self {
            reference,
            department,
            filled: false,
            candidates: Candidates::new(),
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Mark the offer as taken; applicant history is discarded.
    pub fn fill(&mut self) {
        self.filled = true;
        self.candidates.clear();
    }
}

/// One enrolled student and their placement outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub assigned: Option<OfferRef>,
    pub grade: f64,
}

impl Student {
    pub fn new(id: StudentId) -> Self {
        Self {
            id,
            assigned: None,
            grade: 0.0,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }
}

/// Which of the three jury scores a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreComponent {
    Company,
    Report,
    Presentation,
}

impl fmt::Display for ScoreComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Company => write!(f, "company"),
            Self::Report => write!(f, "report"),
            Self::Presentation => write!(f, "presentation"),
        }
    }
}

/// The three component scores a jury records for a student.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub company: f64,
    pub report: f64,
    pub presentation: f64,
}

impl Scores {
    pub fn new(company: f64, report: f64, presentation: f64) -> Self {
        Self {
            company,
            report,
            presentation,
        }
    }

    /// First component outside `[MIN_SCORE, MAX_SCORE]`, if any.
    pub fn out_of_range(&self) -> Option<(ScoreComponent, f64)> {
        [
            (ScoreComponent::Company, self.company),
            (ScoreComponent::Report, self.report),
            (ScoreComponent::Presentation, self.presentation),
        ]
        .into_iter()
        .find(|(_, value)| !score_in_range(*value))
    }

    pub fn mean(&self) -> f64 {
        (self.company + self.report + self.presentation) / 3.0
    }
}

/// True if `value` lies in the inclusive grading range. NaN is rejected.
pub fn score_in_range(value: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&value)
}

/// How to look offers up in [`crate::core::offers::OfferStore::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferQuery {
    /// Unique reference: at most one match.
    Reference(OfferRef),
    /// Department code: any number of matches.
    Department(Department),
}
