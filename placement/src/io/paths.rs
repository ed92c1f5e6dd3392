//! Canonical locations of the config and data files for a working directory.

use std::path::{Path, PathBuf};

use crate::io::config::PlacementConfig;

/// File name of the optional configuration, relative to the root.
pub const CONFIG_FILE: &str = "placement.toml";

/// All paths the registry reads or writes under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub offers_path: PathBuf,
    pub students_path: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>, config: &PlacementConfig) -> Self {
        let root = root.into();
        let data_dir = root.join(&config.data_dir);
        Self {
            config_path: Self::config_path(&root),
            offers_path: data_dir.join(&config.offers_file),
            students_path: data_dir.join(&config.students_file),
            data_dir,
            root,
        }
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_legacy_data_directory() {
        let paths = DataPaths::new("/work", &PlacementConfig::default());
        assert_eq!(paths.config_path, PathBuf::from("/work/placement.toml"));
        assert_eq!(paths.offers_path, PathBuf::from("/work/DATA/offrestage.txt"));
        assert_eq!(paths.students_path, PathBuf::from("/work/DATA/etudiants.txt"));
    }
}
