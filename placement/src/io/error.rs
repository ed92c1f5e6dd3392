//! Failures of the data-file layer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    /// A data file could not be opened or read.
    #[error("cannot load {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file could not be written.
    #[error("cannot save {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file holds more records than the store accepts.
    #[error("{} holds more than {capacity} records", path.display())]
    StoreFull { path: PathBuf, capacity: usize },
}
