//! Infrastructure layer
//!
//! Network, filesystem, and archive extraction. No provisioning logic lives
//! here - that belongs in [`crate::core`].

pub mod download;
pub mod extract;
pub mod filesystem;
