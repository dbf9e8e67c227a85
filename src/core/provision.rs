//! Runtime cache provisioning
//!
//! This module contains the business logic for keeping the runtime cache
//! up to date: reading the version marker, wiping a stale cache, and
//! downloading and extracting the runtime for each requested platform.
//!
//! A version mismatch invalidates the whole cache root, not individual
//! platform directories. Per-platform failures are contained: a platform
//! that fails is logged, cleaned up, and left unpopulated for this run
//! while the remaining platforms are still processed.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::defaults;
use crate::config::DownloadSpec;
use crate::error::{CacheError, FetchError};
use crate::infra::download::{HttpFetcher, ProgressCallback};
use crate::infra::extract::{self, ArchiveFormat};
use crate::infra::filesystem;

/// Resolve the cache root path
///
/// Checks the `DOTFETCH_CACHE_DIR` environment variable first, then falls
/// back to the default relative path.
pub fn resolve_cache_root() -> PathBuf {
    env::var(defaults::ENV_CACHE_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::DEFAULT_CACHE_ROOT))
}

/// Result of an `ensure` run
#[derive(Debug, Default)]
pub struct ProvisionReport {
    /// Platforms downloaded and extracted during this run
    pub provisioned: Vec<String>,
    /// Platforms skipped because their directory was already populated
    pub skipped: Vec<String>,
    /// Failed platforms with error messages
    pub failed: Vec<(String, String)>,
}

/// Factory producing a per-download progress callback for a platform
pub type ProgressFactory = Arc<dyn Fn(&str) -> ProgressCallback + Send + Sync>;

/// Provisions extracted runtime distributions into a local cache directory
#[derive(Clone)]
pub struct RuntimeProvisioner {
    cache_root: PathBuf,
    spec: DownloadSpec,
    fetcher: HttpFetcher,
    progress: Option<ProgressFactory>,
}

impl RuntimeProvisioner {
    /// Create a provisioner for a cache root and download table
    pub fn new(cache_root: impl Into<PathBuf>, spec: DownloadSpec) -> Self {
        Self {
            cache_root: cache_root.into(),
            spec,
            fetcher: HttpFetcher::new(),
            progress: None,
        }
    }

    /// Attach a progress factory, invoked once per platform download
    #[must_use]
    pub fn with_progress(mut self, factory: ProgressFactory) -> Self {
        self.progress = Some(factory);
        self
    }

    /// The cache root this provisioner manages
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Ensure the cache holds an extracted runtime for each platform
    ///
    /// Wipes and recreates the cache root when the stored version marker
    /// differs from the expected version, then provisions each requested
    /// platform independently. Already-populated platform directories are
    /// trusted and skipped.
    ///
    /// Only cache-root setup failures propagate; per-platform failures are
    /// recorded in the report.
    pub async fn ensure(&self, platforms: &[String]) -> Result<ProvisionReport, CacheError> {
        let version_path = self.cache_root.join(defaults::VERSION_MARKER);
        let current_version = filesystem::read_file(&version_path)
            .ok()
            .map(|s| s.trim().to_string());

        tracing::info!(
            "Runtime cache {}: cached version {:?}, expected {}",
            self.cache_root.display(),
            current_version,
            self.spec.version()
        );

        if current_version.as_deref() != Some(self.spec.version()) && self.cache_root.exists() {
            tracing::info!("Clearing outdated cache at {}", self.cache_root.display());
            filesystem::remove_dir_all(&self.cache_root)?;
        }

        filesystem::create_dir_all(&self.cache_root)?;
        filesystem::write_file(&version_path, self.spec.version())?;

        let mut report = ProvisionReport::default();

        if platforms.is_empty() {
            tracing::warn!("No platforms requested; nothing to provision");
            return Ok(report);
        }

        for platform in platforms {
            let entry_dir = self.cache_root.join(platform);
            tracing::info!("Processing platform {platform} ({})", entry_dir.display());

            match self.provision_platform(&entry_dir, platform).await {
                Ok(true) => report.provisioned.push(platform.clone()),
                Ok(false) => {
                    tracing::info!("Platform {platform} already populated, skipping");
                    report.skipped.push(platform.clone());
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to provision platform {platform} into {}: {e}",
                        entry_dir.display()
                    );
                    report.failed.push((platform.clone(), e.to_string()));
                }
            }
        }

        Ok(report)
    }

    /// Provision one platform; `Ok(false)` means the directory was already
    /// populated and nothing was downloaded
    async fn provision_platform(
        &self,
        entry_dir: &Path,
        platform: &str,
    ) -> Result<bool, FetchError> {
        let populated = filesystem::dir_is_populated(entry_dir)
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;
        if populated {
            return Ok(false);
        }

        filesystem::create_dir_all(entry_dir)
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;

        let result = self.fetch_and_extract(entry_dir, platform).await;
        if result.is_err() {
            // Leave the directory empty for the next run
            let _ = std::fs::remove_file(entry_dir.join(defaults::DOWNLOAD_TMP));
        }
        result.map(|()| true)
    }

    /// Download the platform's archive into `target_dir` and extract it
    async fn fetch_and_extract(&self, target_dir: &Path, platform: &str) -> Result<(), FetchError> {
        let url = self
            .spec
            .url_for(platform)
            .ok_or_else(|| FetchError::Configuration {
                platform: platform.to_string(),
            })?;
        let tmp = target_dir.join(defaults::DOWNLOAD_TMP);

        tracing::info!("Downloading {url} to {}", tmp.display());
        let progress = self.progress.as_ref().map(|factory| factory(platform));
        let bytes = self.fetcher.download(url, &tmp, progress.as_ref()).await?;
        tracing::info!("Downloaded {bytes} bytes");

        if !tmp.exists() {
            return Err(FetchError::Integrity {
                url: url.to_string(),
                reason: "download completed but produced no file".to_string(),
            });
        }

        let size = std::fs::metadata(&tmp)
            .map_err(|e| FetchError::Unexpected(e.to_string()))?
            .len();

        // A tiny payload is usually a server error page, not a runtime
        // archive. The sniff is best-effort: a failed peek never aborts the
        // run and extraction proceeds.
        if size < defaults::HTML_SNIFF_THRESHOLD && sniff_html_file(&tmp) {
            let _ = std::fs::remove_file(&tmp);
            return Err(FetchError::Integrity {
                url: url.to_string(),
                reason: "server returned an HTML error page instead of an archive".to_string(),
            });
        }

        let Some(format) = ArchiveFormat::from_url(url) else {
            let _ = std::fs::remove_file(&tmp);
            return Err(FetchError::UnsupportedFormat {
                url: url.to_string(),
            });
        };

        tracing::info!("Extracting {} into {}", tmp.display(), target_dir.display());
        extract::extract(&tmp, target_dir, format)?;

        std::fs::remove_file(&tmp).map_err(|e| FetchError::Unexpected(e.to_string()))?;
        tracing::info!("Provisioned platform {platform}");
        Ok(())
    }
}

/// Check whether file contents look like an HTML document
///
/// Lossy-decodes the bytes and scans for an `html` tag or DOCTYPE,
/// case-insensitively. Read failures count as "not HTML".
fn sniff_html_file(path: &Path) -> bool {
    match std::fs::read(path) {
        Ok(bytes) => looks_like_html(&bytes),
        Err(_) => false,
    }
}

fn looks_like_html(bytes: &[u8]) -> bool {
    let text = String::from_utf8_lossy(bytes).to_lowercase();
    text.contains("html") || text.contains("<!doctype")
}
