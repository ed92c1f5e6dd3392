//! Operations spanning both stores: applications, assignment and grading.
//!
//! [`Registry`] is the single entry point the role sessions call. Every
//! operation either succeeds completely or returns a [`PlacementError`] with
//! both stores left as they were.

use tracing::{debug, info};

use crate::core::error::{PlacementError, Result};
use crate::core::offers::OfferStore;
use crate::core::students::StudentStore;
use crate::core::types::{
    Department, MAX_APPLICATIONS, Offer, OfferQuery, OfferRef, Scores, Student, StudentId,
};

/// The offer and student stores, kept consistent with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    offers: OfferStore,
    students: StudentStore,
}

/// What a student sees when reviewing their applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applications<'a> {
    /// Student holds an assignment; pending candidacies were cleared by it.
    /// `department` is `None` if the offer has since been removed.
    Assigned {
        reference: OfferRef,
        department: Option<Department>,
    },
    /// Offers on which the student is still a candidate.
    Pending(Vec<&'a Offer>),
}

/// A filled offer and the student occupying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledOffer<'a> {
    pub offer: &'a Offer,
    pub student: Option<StudentId>,
}

impl Registry {
    pub fn new(offers: OfferStore, students: StudentStore) -> Self {
        Self { offers, students }
    }

    pub fn offers(&self) -> &OfferStore {
        &self.offers
    }

    pub fn students(&self) -> &StudentStore {
        &self.students
    }

    pub fn add_offer(&mut self, reference: OfferRef, department: Department) -> Result<&Offer> {
        self.offers.add(reference, department)
    }

    pub fn remove_offer(&mut self, reference: OfferRef) -> Result<Offer> {
        self.offers.remove(reference)
    }

    pub fn search(&self, query: OfferQuery) -> Vec<&Offer> {
        self.offers.search(query)
    }

    pub fn list_open(&self) -> impl Iterator<Item = &Offer> + Clone + '_ {
        self.offers.list_open()
    }

    pub fn list_unfilled(&self) -> impl Iterator<Item = &Offer> + Clone + '_ {
        self.offers.list_unfilled()
    }

    /// Filled offers joined with the student assigned to each.
    pub fn list_filled(&self) -> Vec<FilledOffer<'_>> {
        self.offers
            .list_filled()
            .map(|offer| FilledOffer {
                offer,
                student: self
                    .students
                    .assigned_to(offer.reference)
                    .map(|student| student.id),
            })
            .collect()
    }

    pub fn info(&self, reference: OfferRef) -> Result<&Offer> {
        self.offers.info(reference)
    }

    pub fn candidates(&self, reference: OfferRef) -> Result<Vec<StudentId>> {
        self.offers.candidates(reference)
    }

    pub fn student(&self, id: StudentId) -> Result<&Student> {
        self.students.find(id)
    }

    /// Register `student` as a candidate on `reference`.
    ///
    /// A student who already holds an assignment cannot apply again.
    pub fn apply(&mut self, student: StudentId, reference: OfferRef) -> Result<()> {
        if let Some(assigned) = self.assignment_of(student) {
            return Err(PlacementError::AlreadyAssigned {
                student,
                reference: assigned,
            });
        }
        if self.offers.candidacies(student).count() >= MAX_APPLICATIONS {
            return Err(PlacementError::TooManyApplications {
                student,
                limit: MAX_APPLICATIONS,
            });
        }
        let offer = self
            .offers
            .get_mut(reference)
            .ok_or(PlacementError::OfferNotFound(reference))?;
        if offer.filled {
            return Err(PlacementError::OfferFilled(reference));
        }
        if offer.candidates.contains(student) {
            return Err(PlacementError::AlreadyApplied { student, reference });
        }
        if !offer.candidates.push(student) {
            return Err(PlacementError::OfferFull(reference));
        }
        debug!(
            student,
            reference,
            candidates = offer.candidate_count(),
            "application recorded"
        );
        Ok(())
    }

    pub fn view_applications(&self, student: StudentId) -> Result<Applications<'_>> {
        let record = self.students.find(student)?;
        if let Some(reference) = record.assigned {
            return Ok(Applications::Assigned {
                reference,
                department: self.offers.get(reference).map(|offer| offer.department),
            });
        }
        Ok(Applications::Pending(
            self.offers.candidacies(student).collect(),
        ))
    }

    /// Finalize `student` as the occupant of `reference`.
    ///
    /// The student is withdrawn from every other offer, the target offer is
    /// filled with its candidate history cleared, and the student's assignment
    /// is recorded. A student already holding an assignment is refused. All
    /// checks run before anything is mutated.
    pub fn assign(&mut self, reference: OfferRef, student: StudentId) -> Result<()> {
        let offer = self
            .offers
            .get(reference)
            .ok_or(PlacementError::OfferNotFound(reference))?;
        if let Some(assigned) = self.students.find(student)?.assigned {
            return Err(PlacementError::AlreadyAssigned {
                student,
                reference: assigned,
            });
        }
        if !offer.candidates.contains(student) {
            return Err(PlacementError::StudentNotCandidate { student, reference });
        }

        let withdrawn = self.offers.withdraw_elsewhere(student, reference);
        if let Some(offer) = self.offers.get_mut(reference) {
            offer.fill();
        }
        self.students.set_assignment(student, reference)?;
        info!(student, reference, withdrawn = ?withdrawn, "student assigned");
        Ok(())
    }

    pub fn grade(&mut self, student: StudentId, scores: Scores) -> Result<f64> {
        self.students.grade(student, scores)
    }

    fn assignment_of(&self, student: StudentId) -> Option<OfferRef> {
        self.students
            .find(student)
            .ok()
            .and_then(|record| record.assigned)
    }
}
