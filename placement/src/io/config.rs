//! Registry configuration stored in `placement.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::io::write_atomic;

/// Registry configuration (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// historical layout (`DATA/offrestage.txt`, `DATA/etudiants.txt`, 200 records
/// per store).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Directory holding both data files, relative to the root.
    pub data_dir: String,

    pub offers_file: String,

    pub students_file: String,

    /// Maximum number of offers held in memory.
    pub offer_capacity: usize,

    /// Maximum number of students held in memory.
    pub student_capacity: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            data_dir: "DATA".to_string(),
            offers_file: "offrestage.txt".to_string(),
            students_file: "etudiants.txt".to_string(),
            offer_capacity: 200,
            student_capacity: 200,
        }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> Result<()> {
        if self.offer_capacity == 0 {
            return Err(anyhow!("offer_capacity must be > 0"));
        }
        if self.student_capacity == 0 {
            return Err(anyhow!("student_capacity must be > 0"));
        }
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }
        if self.offers_file.trim().is_empty() {
            return Err(anyhow!("offers_file must not be empty"));
        }
        if self.students_file.trim().is_empty() {
            return Err(anyhow!("students_file must not be empty"));
        }
        if self.offers_file == self.students_file {
            return Err(anyhow!("offers_file and students_file must differ"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PlacementConfig::default()`.
pub fn load_config(path: &Path) -> Result<PlacementConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = PlacementConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PlacementConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &PlacementConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf).with_context(|| format!("write config {}", path.display()))
}
