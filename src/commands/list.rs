use super::Overrides;
use crate::SyncContext;
use crate::manifest::read_manifest;
use crate::output;
use crate::scanner::{LineScanner, ReferenceScanner};
use anyhow::Result;
use std::io::{self, Write};

/// List every expected file and whether the manifest references it
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or the scan rules are invalid
pub fn execute(ctx: &SyncContext, overrides: &Overrides) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(ctx, overrides, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Render the listing into `out`
///
/// # Errors
///
/// See [`execute`].
pub fn run(ctx: &SyncContext, overrides: &Overrides, out: &mut impl Write) -> Result<()> {
    let config = overrides.apply(&ctx.config)?;
    let scanner = LineScanner::from_config(&config.scan)?;

    let text = read_manifest(&config.manifest.path, config.manifest.mmap_threshold)?;
    let existing = scanner.scan(&text);

    output::render_listing(out, &config.files, &existing)?;
    Ok(())
}
