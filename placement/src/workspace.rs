//! A loaded registry together with the paths it was read from.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::registry::Registry;
use crate::io::config::{PlacementConfig, load_config};
use crate::io::data_store::{load_registry, save_registry};
use crate::io::error::PersistError;
use crate::io::paths::DataPaths;

#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: PlacementConfig,
    pub paths: DataPaths,
    pub registry: Registry,
}

impl Workspace {
    /// Read `placement.toml` (or defaults) and both data files under `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let config = load_config(&DataPaths::config_path(root)).context("load placement.toml")?;
        let paths = DataPaths::new(root, &config);
        let registry = load_registry(&paths, &config).context("load registry")?;
        Ok(Self {
            config,
            paths,
            registry,
        })
    }

    /// Rewrite both data files from the in-memory registry.
    pub fn save(&self) -> Result<(), PersistError> {
        save_registry(&self.paths, &self.registry)
    }
}
