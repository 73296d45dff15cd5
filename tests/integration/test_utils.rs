//! Shared test utilities for integration tests

use std::path::Path;
use tempfile::TempDir;

/// Create a temporary configuration directory holding the given files.
pub fn config_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, contents) in files {
        write(temp_dir.path(), name, contents);
    }
    temp_dir
}

pub fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

pub fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}
