//! I/O for the registry: configuration, data files and scaffolding.

pub mod config;
pub mod data_store;
pub mod error;
pub mod init;
pub mod offer_file;
pub mod paths;
pub mod scan;
pub mod student_file;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Replace `path` with `contents` via a sibling temp file and a rename, so a
/// failed write never leaves a truncated file behind.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = tmp_sibling(path);
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_replaces_contents_and_cleans_up() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("file.txt");
        write_atomic(&path, "first").expect("first write");
        write_atomic(&path, "second").expect("second write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "second");
        assert!(!tmp_sibling(&path).exists());
    }
}
