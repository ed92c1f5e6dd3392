//! Bounded collection of enrolled students.

use tracing::debug;

use crate::core::error::{PlacementError, Result};
use crate::core::types::{OfferRef, Scores, Student, StudentId};

#[derive(Debug, Clone, PartialEq)]
pub struct StudentStore {
    students: Vec<Student>,
    capacity: usize,
}

impl StudentStore {
    /// Empty store holding at most `capacity` students.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            students: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Append a record read from storage. Fails once capacity is reached.
    pub fn push_loaded(&mut self, student: Student) -> Result<()> {
        if self.students.len() >= self.capacity {
            return Err(PlacementError::StoreFull {
                capacity: self.capacity,
            });
        }
        self.students.push(student);
        Ok(())
    }

    /// Login-by-id lookup.
    pub fn find(&self, id: StudentId) -> Result<&Student> {
        self.students
            .iter()
            .find(|student| student.id == id)
            .ok_or(PlacementError::StudentNotFound(id))
    }

    fn find_mut(&mut self, id: StudentId) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|student| student.id == id)
            .ok_or(PlacementError::StudentNotFound(id))
    }

    /// Student assigned to `reference`, if any.
    pub fn assigned_to(&self, reference: OfferRef) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.assigned == Some(reference))
    }

    pub(crate) fn set_assignment(&mut self, id: StudentId, reference: OfferRef) -> Result<()> {
        let student = self.find_mut(id)?;
        student.assigned = Some(reference);
        Ok(())
    }

    /// Record the jury's scores and return the resulting mean. Any earlier
    /// grade is overwritten.
    pub fn grade(&mut self, id: StudentId, scores: Scores) -> Result<f64> {
        let student = self.find_mut(id)?;
        if let Some((component, value)) = scores.out_of_range() {
            return Err(PlacementError::InvalidScore { component, value });
        }
        let mean = scores.mean();
        student.grade = mean;
        debug!(student = id, grade = mean, "student graded");
        Ok(mean)
    }
}
