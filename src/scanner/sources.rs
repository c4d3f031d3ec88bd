use crate::config::ExpectedFile;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Build the expected file list from the sources under `root`
///
/// Every regular file whose name ends in `.<extension>` becomes an
/// [`ExpectedFile`]: its path relative to `root`, its parent folder name as
/// the group (empty at the root), and its bare name. Hidden directories such
/// as `.build` are skipped, symlinks are not followed, and the result is
/// sorted by path so the list is stable between runs.
///
/// # Arguments
/// * `root` - Source directory, e.g. `MyApp/MyApp/`
/// * `extension` - Extension without the leading dot
///
/// # Errors
///
/// Returns an error if `root` is not a directory or traversal fails
pub fn discover_expected_files(root: &Path, extension: &str) -> Result<Vec<ExpectedFile>> {
    if !root.is_dir() {
        anyhow::bail!("Source directory not found: {}", root.display());
    }

    let suffix = format!(".{extension}");
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(&suffix) || name.len() == suffix.len() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let group = relative
            .parent()
            .and_then(Path::file_name)
            .and_then(|g| g.to_str())
            .unwrap_or_default();
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        files.push(ExpectedFile::new(path, group, name));
    }

    tracing::debug!(root = %root.display(), count = files.len(), "Discovered source files");
    Ok(files)
}

/// Dot-prefixed entries (`.git`, `.build`, `.DS_Store`)
fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}
