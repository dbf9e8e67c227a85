//! Dotfetch - Build-time .NET runtime cache provisioner
//!
//! This library ensures a local cache directory holds an extracted .NET
//! runtime distribution for each requested target platform, downloading and
//! unpacking archives on demand and skipping work when a valid cache exists.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Provisioning logic (cache validity, per-platform workflow)
//! - [`infra`] - Infrastructure layer (network, filesystem, extraction)
//! - [`config`] - Download table and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
