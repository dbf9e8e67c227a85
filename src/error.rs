//! Error types for dotfetch
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Errors during a single platform's fetch and extract
///
/// All of these are contained at single-platform granularity: they are
/// logged, the temp file is cleaned up, and the run continues with the next
/// platform.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Requested platform has no entry in the download table
    #[error("No download configured for platform '{platform}'")]
    Configuration { platform: String },

    /// Download did not produce a usable file
    #[error("Download integrity failure for '{url}': {reason}")]
    Integrity { url: String, reason: String },

    /// URL suffix does not map to a known archive format
    #[error("Unknown archive format for '{url}' (expected .tar.gz or .zip)")]
    UnsupportedFormat { url: String },

    /// Transport-level failure during fetch
    #[error("Network error downloading '{url}': {error}")]
    Network { url: String, error: String },

    /// Corrupt or unreadable archive content
    #[error("Failed to extract archive '{path}': {error}")]
    Archive { path: PathBuf, error: String },

    /// Catch-all for anything else during one platform's provisioning
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to read directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Cache-root setup errors
///
/// Unlike [`FetchError`], these abort the whole run: a broken cache root
/// makes all per-platform work meaningless.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Filesystem error while preparing the cache root
    #[error("Cache setup failed: {0}")]
    Filesystem(#[from] FilesystemError),
}
