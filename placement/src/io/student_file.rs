//! Student data file: one `id assigned_reference grade` line per student.
//!
//! An unassigned student is stored with the reference `-1`.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::students::StudentStore;
use crate::core::types::{OfferRef, Student, StudentId};
use crate::io::error::PersistError;
use crate::io::scan::Scanner;
use crate::io::write_atomic;

const UNASSIGNED: i64 = -1;

/// The student file held more records than the store accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    pub capacity: usize,
}

/// Parse student triples from `contents` into `store`.
///
/// Reading ends at end of input, at a non-numeric student id or at the first
/// incomplete triple. Unlike the offer file, a record past capacity is an
/// error.
pub fn parse_students(contents: &str, store: &mut StudentStore) -> Result<usize, Overflow> {
    let capacity = store.capacity();
    let mut scanner = Scanner::new(contents);
    let mut loaded = 0;
    loop {
        let Some(id) = scanner.read::<StudentId>() else {
            if let Some(token) = scanner.bad_token() {
                warn!(token, loaded, "student scan ended at a non-numeric student id");
            }
            break;
        };
        let Some(student) = read_rest(&mut scanner, id) else {
            warn!(student = id, loaded, "student scan ended at an incomplete record");
            break;
        };
        store
            .push_loaded(student)
            .map_err(|_| Overflow { capacity })?;
        loaded += 1;
    }
    Ok(loaded)
}

fn read_rest(scanner: &mut Scanner<'_>, id: StudentId) -> Option<Student> {
    let assigned = scanner.read::<i64>()?;
    let grade = scanner.read::<f64>()?;
    let assigned = if assigned < 0 {
        None
    } else {
        Some(OfferRef::try_from(assigned).ok()?)
    };
    Some(Student {
        id,
        assigned,
        grade,
    })
}

/// Read the student file at `path` into `store`.
pub fn load_students(path: &Path, store: &mut StudentStore) -> Result<usize, PersistError> {
    debug!(path = %path.display(), "loading students");
    let contents = fs::read_to_string(path).map_err(|source| PersistError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_students(&contents, store).map_err(|overflow| PersistError::StoreFull {
        path: path.to_path_buf(),
        capacity: overflow.capacity,
    })?;
    debug!(loaded, "students loaded");
    Ok(loaded)
}

pub fn render_students(store: &StudentStore) -> String {
    let mut buf = String::new();
    for student in store.iter() {
        let assigned = student.assigned.map_or(UNASSIGNED, i64::from);
        buf.push_str(&format!(
            "{} {} {:.2}\n",
            student.id, assigned, student.grade
        ));
    }
    buf
}

/// Overwrite the student file at `path` with the current store.
pub fn write_students(path: &Path, store: &StudentStore) -> Result<(), PersistError> {
    debug!(path = %path.display(), students = store.len(), "writing students");
    write_atomic(path, &render_students(store)).map_err(|source| PersistError::Save {
        path: path.to_path_buf(),
        source,
    })
}
