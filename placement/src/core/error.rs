//! Recoverable failures of store operations.

use thiserror::Error;

use crate::core::types::{OfferRef, ScoreComponent, StudentId};

/// Why a store operation was refused. State is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("an offer with reference {0} already exists")]
    DuplicateReference(OfferRef),

    #[error("offer reference {0} is below the minimum of 1000")]
    InvalidReference(OfferRef),

    #[error("store is full ({capacity} records)")]
    StoreFull { capacity: usize },

    #[error("no offer with reference {0}")]
    NotFound(OfferRef),

    #[error("offer {0} does not exist")]
    OfferNotFound(OfferRef),

    #[error("student {0} does not exist")]
    StudentNotFound(StudentId),

    #[error("student {student} already applied to offer {reference}")]
    AlreadyApplied {
        student: StudentId,
        reference: OfferRef,
    },

    #[error("student {student} is already assigned to offer {reference}")]
    AlreadyAssigned {
        student: StudentId,
        reference: OfferRef,
    },

    #[error("offer {0} is already filled")]
    OfferFilled(OfferRef),

    #[error("offer {0} already has the maximum number of candidates")]
    OfferFull(OfferRef),

    #[error("student {student} already has {limit} pending applications")]
    TooManyApplications { student: StudentId, limit: usize },

    #[error("student {student} is not a candidate on offer {reference}")]
    StudentNotCandidate {
        student: StudentId,
        reference: OfferRef,
    },

    #[error("{component} score {value} is outside [0, 20]")]
    InvalidScore {
        component: ScoreComponent,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, PlacementError>;
