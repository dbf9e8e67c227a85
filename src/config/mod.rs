//! Configuration and constants
//!
//! The download table, target version, and tunables are all embedded; there
//! is no configuration file.

pub mod defaults;
pub mod downloads;

pub use downloads::{DownloadSpec, RUNTIME_VERSION};
