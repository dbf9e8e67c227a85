//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a temporary
//! cache root and in-memory archive fixtures served through wiremock.

use std::io::{Cursor, Write};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test cache context
///
/// Creates a temporary directory and exposes a cache-root path inside it
/// that does not exist until the provisioner creates it.
pub struct TestCache {
    /// Temporary directory backing the cache
    pub dir: TempDir,
}

impl TestCache {
    /// Create a new test cache in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Cache-root path inside the temporary directory
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("dotnet")
    }

    /// Check if a path exists relative to the cache root
    #[allow(dead_code)]
    pub fn exists(&self, name: &str) -> bool {
        self.root().join(name).exists()
    }

    /// Read a file relative to the cache root
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.root().join(name)).expect("Failed to read file")
    }
}

impl Default for TestCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an in-memory gzip-compressed tarball from (name, content) entries
#[allow(dead_code)]
pub fn tar_gz_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, content.as_bytes())
            .expect("Failed to append tar entry");
    }
    builder
        .into_inner()
        .expect("Failed to finish tarball")
        .finish()
        .expect("Failed to finish gzip stream")
}

/// Build an in-memory zip archive from (name, content) entries
#[allow(dead_code)]
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::FileOptions::default();
    for (name, content) in entries {
        writer
            .start_file(*name, options)
            .expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}
