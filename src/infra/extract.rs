//! Archive extraction
//!
//! Unpacks downloaded runtime archives. The format is decided by the
//! download URL's suffix: `.tar.gz` and `.zip` are the only formats the
//! runtime builds ship in.

use std::fs::File;
use std::io;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use zip::ZipArchive;

use crate::error::FetchError;

/// Supported archive formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// Gzip-compressed tarball
    TarGz,
    /// Zip archive
    Zip,
}

impl ArchiveFormat {
    /// Determine the archive format from a URL or filename suffix
    pub fn from_url(url: &str) -> Option<Self> {
        if url.ends_with(".tar.gz") {
            Some(Self::TarGz)
        } else if url.ends_with(".zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }
}

/// Extract an archive into a destination directory
pub fn extract(archive_path: &Path, dest: &Path, format: ArchiveFormat) -> Result<(), FetchError> {
    match format {
        ArchiveFormat::TarGz => extract_tar_gz(archive_path, dest),
        ArchiveFormat::Zip => extract_zip(archive_path, dest),
    }
}

fn extract_tar_gz(archive_path: &Path, dest: &Path) -> Result<(), FetchError> {
    let file = File::open(archive_path).map_err(|e| FetchError::Archive {
        path: archive_path.to_path_buf(),
        error: e.to_string(),
    })?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);
    archive.unpack(dest).map_err(|e| FetchError::Archive {
        path: archive_path.to_path_buf(),
        error: e.to_string(),
    })
}

fn extract_zip(archive_path: &Path, dest: &Path) -> Result<(), FetchError> {
    let file = File::open(archive_path).map_err(|e| FetchError::Archive {
        path: archive_path.to_path_buf(),
        error: e.to_string(),
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| FetchError::Archive {
        path: archive_path.to_path_buf(),
        error: e.to_string(),
    })?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| FetchError::Archive {
            path: archive_path.to_path_buf(),
            error: e.to_string(),
        })?;

        // enclosed_name rejects entries that would escape the destination
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            continue;
        };
        let outpath = dest.join(relative);

        let io_err = |e: io::Error| FetchError::Archive {
            path: archive_path.to_path_buf(),
            error: e.to_string(),
        };

        if entry.name().ends_with('/') {
            std::fs::create_dir_all(&outpath).map_err(io_err)?;
        } else {
            if let Some(parent) = outpath.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(io_err)?;
                }
            }
            let mut outfile = File::create(&outpath).map_err(io_err)?;
            io::copy(&mut entry, &mut outfile).map_err(io_err)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))
                    .map_err(io_err)?;
            }
        }
    }
    Ok(())
}
