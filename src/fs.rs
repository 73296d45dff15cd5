//! File access for configuration files
//!
//! Thin wrappers resolving `directory/filename` and moving bytes in and out.
//! Writes go to a temporary sibling file first and are renamed into place.

use crate::error::{IniError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Resolve a configuration file path, rejecting an empty filename.
pub fn resolve(directory: &Path, filename: &str) -> Result<PathBuf> {
    if filename.is_empty() {
        return Err(IniError::MissingFilename);
    }
    Ok(directory.join(filename))
}

/// Read `directory/filename`.
///
/// A missing file surfaces as `IniError::Io` with kind `NotFound`.
pub fn read_file(directory: &Path, filename: &str) -> Result<Vec<u8>> {
    let path = resolve(directory, filename)?;
    trace!(path = %path.display(), "Reading configuration file");
    Ok(fs::read(&path)?)
}

/// Replace `directory/filename` with `contents`, creating the directory if needed.
pub fn write_file(directory: &Path, filename: &str, contents: &[u8]) -> Result<PathBuf> {
    let path = resolve(directory, filename)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(&path);
    fs::write(&temp_path, contents)?;
    if let Err(e) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    trace!(path = %path.display(), bytes = contents.len(), "Wrote configuration file");
    Ok(path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
