//! Shared setup for integration tests.
//!
//! Every test gets its own temporary data and source directories, so tests
//! can run in parallel without touching a real bank.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

use gift_bank::store::JsonStore;
use tempfile::TempDir;

/// Temporary bank with a source directory for `.gift` files.
pub struct TestContext {
    pub store: JsonStore,
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonStore::open(dir.path().join("store"));
        fs::create_dir_all(dir.path().join("source")).expect("Failed to create source dir");
        Self { store, dir }
    }

    pub fn source_dir(&self) -> PathBuf {
        self.dir.path().join("source")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.dir.path().join("exports")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a `.gift` file into the source directory.
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.source_dir().join(name);
        fs::write(&path, content).expect("Failed to write source file");
        path
    }
}
