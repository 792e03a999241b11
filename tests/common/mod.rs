//! Shared helpers for integration tests.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path to the compiled machfile binary under test.
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_machfile"))
}

pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Write a Machfile with the given content into `dir` and return its path.
pub fn create_machfile(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("Machfile");
    fs::write(&path, content).expect("Failed to write Machfile");
    path
}
