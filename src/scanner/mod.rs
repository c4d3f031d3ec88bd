/// File-reference extraction from manifest text.
pub mod references;

/// Expected-file discovery from a source directory on disk.
pub mod sources;

pub use references::{LineScanner, ReferenceScanner, ScanError};
pub use sources::discover_expected_files;
