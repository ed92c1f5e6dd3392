//! Data check for `placement check`.

use std::path::Path;

use anyhow::Result;

use crate::core::invariants::validate_invariants;
use crate::workspace::Workspace;

/// Counts and invariant violations found in the data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub offers: usize,
    pub students: usize,
    pub violations: Vec<String>,
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Load the data under `root` and collect every invariant violation.
pub fn check_data(root: &Path) -> Result<CheckOutcome> {
    let workspace = Workspace::open(root)?;
    let registry = &workspace.registry;
    Ok(CheckOutcome {
        offers: registry.offers().len(),
        students: registry.students().len(),
        violations: validate_invariants(registry),
    })
}
