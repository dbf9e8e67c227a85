//! Provisioning logic
//!
//! Cache validity checking and the per-platform download/extract workflow.

pub mod provision;
