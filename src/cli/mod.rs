//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no provisioning logic - that belongs in the
//! [`crate::core`] module.

pub mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::DownloadSpec;
use crate::core::provision::{resolve_cache_root, ProgressFactory, RuntimeProvisioner};
use crate::infra::download::ProgressCallback;
use output::status;

/// Dotfetch - Build-time .NET runtime cache provisioner
///
/// Ensures the local cache holds an extracted .NET runtime for each
/// requested platform, downloading and unpacking archives on demand.
#[derive(Parser, Debug)]
#[command(name = "dotfetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target platforms to provision (windows, linux, mac)
    pub platforms: Vec<String>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let mut provisioner = RuntimeProvisioner::new(resolve_cache_root(), DownloadSpec::builtin());
        if !self.quiet {
            provisioner = provisioner.with_progress(download_progress());
        }

        let report = provisioner
            .ensure(&self.platforms)
            .await
            .with_context(|| "Failed to prepare runtime cache")?;

        if self.quiet {
            return Ok(());
        }

        // Print summary
        if self.platforms.is_empty() {
            println!("{} No platforms requested; nothing to provision", status::WARNING);
            return Ok(());
        }

        if !report.provisioned.is_empty() {
            println!(
                "{} Provisioned {} platform(s):",
                status::SUCCESS,
                report.provisioned.len()
            );
            for platform in &report.provisioned {
                println!("    {platform}");
            }
        }

        if !report.skipped.is_empty() {
            println!(
                "  Skipped {} platform(s) (already populated)",
                report.skipped.len()
            );
        }

        if !report.failed.is_empty() {
            println!(
                "{} Failed to provision {} platform(s):",
                status::ERROR,
                report.failed.len()
            );
            for (platform, error) in &report.failed {
                println!("    {platform}: {error}");
            }
        }

        Ok(())
    }
}

/// Progress factory rendering one download bar per platform
fn download_progress() -> ProgressFactory {
    Arc::new(|platform: &str| {
        let bar = output::create_download_bar(platform);
        let callback: ProgressCallback = Box::new(move |downloaded, total| {
            if total > 0 && bar.length() != Some(total) {
                bar.set_length(total);
            }
            bar.set_position(downloaded);
            if total > 0 && downloaded >= total {
                bar.finish_and_clear();
            }
        });
        callback
    })
}
