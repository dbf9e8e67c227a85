//! Runtime download table
//!
//! Maps platform identifiers to the archive URL for the pinned runtime
//! version. Platform names are matched case-sensitively.

use std::collections::BTreeMap;

/// Platform identifier for Windows
pub const PLATFORM_WINDOWS: &str = "windows";

/// Platform identifier for Linux
pub const PLATFORM_LINUX: &str = "linux";

/// Platform identifier for macOS
pub const PLATFORM_MACOS: &str = "mac";

/// Pinned .NET runtime version
pub const RUNTIME_VERSION: &str = "10.0.0";

/// Download base URL for official runtime builds
const DOWNLOAD_BASE: &str = "https://builds.dotnet.microsoft.com/dotnet/Runtime";

/// Static table mapping platform identifier to archive URL
///
/// The expected version travels with the table so tests can provision
/// against a throwaway version and server.
#[derive(Debug, Clone)]
pub struct DownloadSpec {
    version: String,
    urls: BTreeMap<String, String>,
}

impl DownloadSpec {
    /// The embedded table for the pinned [`RUNTIME_VERSION`]
    pub fn builtin() -> Self {
        let v = RUNTIME_VERSION;
        let mut urls = BTreeMap::new();
        urls.insert(
            PLATFORM_LINUX.to_string(),
            format!("{DOWNLOAD_BASE}/{v}/dotnet-runtime-{v}-linux-x64.tar.gz"),
        );
        urls.insert(
            PLATFORM_WINDOWS.to_string(),
            format!("{DOWNLOAD_BASE}/{v}/dotnet-runtime-{v}-win-x64.zip"),
        );
        urls.insert(
            PLATFORM_MACOS.to_string(),
            format!("{DOWNLOAD_BASE}/{v}/dotnet-runtime-{v}-osx-x64.tar.gz"),
        );
        Self {
            version: v.to_string(),
            urls,
        }
    }

    /// Build a spec from an explicit version and platform/URL pairs
    pub fn new<I, K, V>(version: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            version: version.to_string(),
            urls: entries
                .into_iter()
                .map(|(p, u)| (p.into(), u.into()))
                .collect(),
        }
    }

    /// Expected runtime version for this table
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up the download URL for a platform (case-sensitive)
    pub fn url_for(&self, platform: &str) -> Option<&str> {
        self.urls.get(platform).map(String::as_str)
    }

    /// Known platform identifiers, in stable order
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.urls.keys().map(String::as_str)
    }
}
