//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars and
//! formatted messages to the user.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for a platform download
///
/// The length is unknown until the server reports a content length, so the
/// bar starts empty and is sized by the caller.
pub fn create_download_bar(platform: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(platform.to_string());
    pb
}

/// Display a top-level error to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}
