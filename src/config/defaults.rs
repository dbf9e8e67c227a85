//! Default configuration values

/// Default cache root, relative to the working directory
pub const DEFAULT_CACHE_ROOT: &str = "Dependencies/dotnet";

/// Environment variable overriding the cache root
pub const ENV_CACHE_DIR: &str = "DOTFETCH_CACHE_DIR";

/// Name of the version marker file inside the cache root
pub const VERSION_MARKER: &str = "VERSION";

/// Name of the transient download file inside a platform directory
pub const DOWNLOAD_TMP: &str = "download.tmp";

/// Downloads smaller than this are sniffed for HTML error pages (bytes)
pub const HTML_SNIFF_THRESHOLD: u64 = 10 * 1024;

/// Overall request timeout for a single download (seconds)
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Connect timeout for a single download (seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 30;
