//! Test-only helpers for constructing offers, students and stores.

use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::offers::OfferStore;
use crate::core::registry::Registry;
use crate::core::students::StudentStore;
use crate::core::types::{Candidates, Department, Offer, OfferRef, Student, StudentId};
use crate::io::config::{PlacementConfig, write_config};
use crate::io::paths::DataPaths;

/// Create an unfilled offer with no candidates.
pub fn offer(reference: OfferRef, department: Department) -> Offer {
    Offer::new(reference, department)
}

/// Create an unfilled offer with the given candidates in slot order.
pub fn offer_with_candidates(
    reference: OfferRef,
    department: Department,
    candidates: &[StudentId],
) -> Offer {
    Offer {
        candidates: Candidates::from_ids(candidates.iter().copied()),
        ..offer(reference, department)
    }
}

/// Create an unassigned, ungraded student.
pub fn student(id: StudentId) -> Student {
    Student::new(id)
}

/// Build an offer store as if loaded from disk (no duplicate checks).
pub fn offer_store(capacity: usize, offers: Vec<Offer>) -> OfferStore {
    let mut store = OfferStore::with_capacity(capacity);
    for offer in offers {
        store.push_loaded(offer).expect("offer fixture exceeds capacity");
    }
    store
}

pub fn student_store(capacity: usize, students: Vec<Student>) -> StudentStore {
    let mut store = StudentStore::with_capacity(capacity);
    for student in students {
        store
            .push_loaded(student)
            .expect("student fixture exceeds capacity");
    }
    store
}

/// Registry with room for 200 offers and 200 students.
pub fn registry_with(offers: Vec<Offer>, students: Vec<Student>) -> Registry {
    Registry::new(offer_store(200, offers), student_store(200, students))
}

/// Temporary working directory with a config and data files.
pub struct TestData {
    dir: TempDir,
    paths: DataPaths,
}

impl TestData {
    /// Create a workspace with the default config and the given file contents.
    pub fn new(offers: &str, students: &str) -> Result<Self> {
        Self::with_config(&PlacementConfig::default(), offers, students)
    }

    pub fn with_config(config: &PlacementConfig, offers: &str, students: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        write_config(&DataPaths::config_path(dir.path()), config)?;
        let paths = DataPaths::new(dir.path(), config);
        std::fs::create_dir_all(&paths.data_dir)
            .with_context(|| format!("create {}", paths.data_dir.display()))?;
        std::fs::write(&paths.offers_path, offers)
            .with_context(|| format!("write {}", paths.offers_path.display()))?;
        std::fs::write(&paths.students_path, students)
            .with_context(|| format!("write {}", paths.students_path.display()))?;
        Ok(Self { dir, paths })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn read_offers(&self) -> Result<String> {
        std::fs::read_to_string(&self.paths.offers_path).context("read offers file")
    }

    pub fn read_students(&self) -> Result<String> {
        std::fs::read_to_string(&self.paths.students_path).context("read students file")
    }
}
