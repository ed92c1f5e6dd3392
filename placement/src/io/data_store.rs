//! Load and save the whole registry from its two data files.

use tracing::{debug, info};

use crate::core::offers::OfferStore;
use crate::core::registry::Registry;
use crate::core::students::StudentStore;
use crate::io::config::PlacementConfig;
use crate::io::error::PersistError;
use crate::io::offer_file::{load_offers, write_offers};
use crate::io::paths::DataPaths;
use crate::io::student_file::{load_students, write_students};

/// Build a registry from the offer and student files named by `paths`.
pub fn load_registry(
    paths: &DataPaths,
    config: &PlacementConfig,
) -> Result<Registry, PersistError> {
    let mut offers = OfferStore::with_capacity(config.offer_capacity);
    let offer_count = load_offers(&paths.offers_path, &mut offers)?;

    let mut students = StudentStore::with_capacity(config.student_capacity);
    let student_count = load_students(&paths.students_path, &mut students)?;

    info!(
        offers = offer_count,
        students = student_count,
        "registry loaded"
    );
    Ok(Registry::new(offers, students))
}

/// Rewrite both data files from `registry`.
///
/// Offers are written first; if that fails the student file is left as it
/// was. Each file is replaced atomically.
pub fn save_registry(paths: &DataPaths, registry: &Registry) -> Result<(), PersistError> {
    write_offers(&paths.offers_path, registry.offers())?;
    write_students(&paths.students_path, registry.students())?;
    debug!(root = %paths.root.display(), "registry saved");
    Ok(())
}
