//! Scaffolding for a fresh data directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::info;

use crate::io::config::{PlacementConfig, load_config, write_config};
use crate::io::paths::DataPaths;
use crate::io::write_atomic;

/// Options for `init_data`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing data files and config.
    pub force: bool,
}

/// Create the config and empty data files under `root`.
///
/// An existing config is reused unless `options.force` is set. Fails if either
/// data file already exists unless `options.force` is set.
pub fn init_data(root: &Path, options: &InitOptions) -> Result<DataPaths> {
    let config_path = DataPaths::config_path(root);
    let config = if options.force || !config_path.exists() {
        let config = PlacementConfig::default();
        write_config(&config_path, &config)?;
        config
    } else {
        load_config(&config_path)?
    };

    let paths = DataPaths::new(root, &config);
    for path in [&paths.offers_path, &paths.students_path] {
        if path.exists() && !options.force {
            return Err(anyhow!(
                "placement init: {} already exists (use --force to overwrite)",
                path.display()
            ));
        }
    }

    fs::create_dir_all(&paths.data_dir)
        .with_context(|| format!("create directory {}", paths.data_dir.display()))?;
    for path in [&paths.offers_path, &paths.students_path] {
        write_atomic(path, "").with_context(|| format!("write {}", path.display()))?;
    }
    info!(data_dir = %paths.data_dir.display(), "data directory initialized");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_empty_files_and_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_data(temp.path(), &InitOptions { force: false }).expect("init");
        assert_eq!(fs::read_to_string(&paths.offers_path).expect("offers"), "");
        assert_eq!(fs::read_to_string(&paths.students_path).expect("students"), "");
        assert!(paths.config_path.exists());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_data(temp.path(), &InitOptions { force: false }).expect("init");
        fs::write(&paths.offers_path, "1500 12 0 0\n").expect("write");

        let err = init_data(temp.path(), &InitOptions { force: false }).expect_err("exists");
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(&paths.offers_path).expect("offers"),
            "1500 12 0 0\n"
        );

        init_data(temp.path(), &InitOptions { force: true }).expect("force");
        assert_eq!(fs::read_to_string(&paths.offers_path).expect("offers"), "");
    }

    #[test]
    fn init_honors_existing_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = PlacementConfig {
            data_dir: "records".to_string(),
            ..PlacementConfig::default()
        };
        write_config(&DataPaths::config_path(temp.path()), &config).expect("config");
        let paths = init_data(temp.path(), &InitOptions { force: false }).expect("init");
        assert_eq!(paths.data_dir, temp.path().join("records"));
        assert!(paths.offers_path.exists());
    }
}
