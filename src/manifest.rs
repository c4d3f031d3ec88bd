//! Manifest reading.
//!
//! The manifest is read once, as text, and never written. Every failure on
//! this path is a [`ManifestError`]: the file is missing, unreadable, or not
//! UTF-8.

use memmap2::MmapOptions;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{Level, debug, span};

/// The manifest could not be read.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No file at the configured path.
    #[error("Manifest not found: {}", path.display())]
    NotFound {
        /// Path that was tried
        path: PathBuf,
    },

    /// The file exists but the process may not read it.
    #[error("Permission denied reading manifest: {}", path.display())]
    PermissionDenied {
        /// Path that was tried
        path: PathBuf,
    },

    /// The file is not valid UTF-8.
    #[error("Manifest is not valid UTF-8: {}", path.display())]
    InvalidUtf8 {
        /// Path that was read
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        /// Path that was tried
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl ManifestError {
    /// Classify an I/O error raised while reading `path`.
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Read the whole manifest as UTF-8 text.
///
/// Files of `mmap_threshold` bytes or more are memory-mapped and validated in
/// place; smaller ones are read into a buffer.
///
/// # Errors
///
/// Returns [`ManifestError`] if the file is missing, unreadable or not UTF-8.
pub fn read_manifest(path: &Path, mmap_threshold: u64) -> Result<String, ManifestError> {
    let span = span!(Level::DEBUG, "read_manifest", path = %path.display());
    let _guard = span.enter();

    let metadata = std::fs::metadata(path).map_err(|e| ManifestError::from_io(path, e))?;

    // Empty files cannot be mapped
    if metadata.len() == 0 || metadata.len() < mmap_threshold {
        let bytes = std::fs::read(path).map_err(|e| ManifestError::from_io(path, e))?;
        debug!(bytes = bytes.len(), "Read manifest");
        return String::from_utf8(bytes).map_err(|_| ManifestError::InvalidUtf8 {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| ManifestError::from_io(path, e))?;
    // SAFETY: read-only map, dropped before return. Contents are validated
    // before being copied out.
    let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|e| ManifestError::from_io(path, e))?;
    debug!(bytes = mmap.len(), "Mapped manifest");

    let text = simdutf8::basic::from_utf8(&mmap).map_err(|_| ManifestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reads_small_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "// !$*UTF8*$!\n{\n}\n").unwrap();

        let text = read_manifest(&path, 1_048_576).unwrap();
        assert!(text.starts_with("// !$*UTF8*$!"));
    }

    #[test]
    fn test_reads_mapped_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        fs::write(&path, "line one\nline two\n").unwrap();

        // Threshold of zero forces the mmap path
        let text = read_manifest(&path, 0).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.pbxproj");

        let err = read_manifest(&path, 1_048_576).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
        assert!(err.to_string().contains("missing.pbxproj"));
    }

    #[test]
    fn test_invalid_utf8_both_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.pbxproj");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x0a]).unwrap();

        assert!(matches!(
            read_manifest(&path, 1_048_576),
            Err(ManifestError::InvalidUtf8 { .. })
        ));
        assert!(matches!(
            read_manifest(&path, 0),
            Err(ManifestError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_permission_denied_is_classified() {
        let path = Path::new("/locked/App.xcodeproj/project.pbxproj");
        let err = ManifestError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));

        assert!(matches!(err, ManifestError::PermissionDenied { .. }));
        assert!(err.to_string().contains("Permission denied"));
        assert!(err.to_string().contains("project.pbxproj"));
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let path = Path::new("project.pbxproj");
        let err = ManifestError::from_io(path, io::Error::from(io::ErrorKind::Other));

        assert!(matches!(err, ManifestError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to read manifest project.pbxproj"));
    }
}
