//! HTTP download functionality
//!
//! Streams a URL to a file on disk with optional progress reporting. There
//! is deliberately no retry here: a failed platform is simply left
//! unprovisioned for this run.

use futures::StreamExt;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::error::FetchError;

/// Progress callback type for download progress reporting
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// HTTP fetcher for streaming downloads to disk
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher with the default timeouts
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(defaults::DOWNLOAD_TIMEOUT_SECS))
                .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Download a URL to a file
    ///
    /// # Arguments
    /// * `url` - URL to download from
    /// * `dest` - Destination path
    /// * `progress` - Optional progress callback (`bytes_downloaded`, `total_bytes`)
    ///
    /// # Returns
    /// Number of bytes written to `dest`
    pub async fn download(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Result<u64, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Network {
                url: url.to_string(),
                error: format!("HTTP {}", response.status()),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        let mut file = File::create(dest).await.map_err(|e| {
            FetchError::Unexpected(format!("Failed to create '{}': {e}", dest.display()))
        })?;

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| FetchError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk).await.map_err(|e| {
                FetchError::Unexpected(format!("Failed to write '{}': {e}", dest.display()))
            })?;

            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total_size);
            }
        }

        file.flush().await.map_err(|e| {
            FetchError::Unexpected(format!("Failed to flush '{}': {e}", dest.display()))
        })?;

        Ok(downloaded)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
