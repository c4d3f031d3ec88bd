use super::Overrides;
use crate::SyncContext;
use crate::check::{CheckReport, Verdict, check_text};
use crate::manifest::read_manifest;
use crate::output::{self, Verbosity};
use crate::scanner::LineScanner;
use anyhow::Result;
use std::io::{self, Write};

/// Check the manifest and print the verdict to stdout
///
/// # Errors
///
/// Returns an error if:
/// - The manifest cannot be read
/// - The scan rules are invalid
/// - Source discovery fails (with `--source-dir`)
pub fn execute(ctx: &SyncContext, overrides: &Overrides) -> Result<Verdict> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let show_progress = output::get_verbosity() != Verbosity::Quiet;
    let report = run(ctx, overrides, show_progress, &mut out)?;
    out.flush()?;
    Ok(report.verdict)
}

/// Check the manifest, rendering progress and the verdict into `out`
///
/// Progress lines are skipped unless `show_progress` is set; the verdict is
/// always rendered.
///
/// Nothing about the verdict is written when the manifest cannot be read.
///
/// # Errors
///
/// See [`execute`].
pub fn run(
    ctx: &SyncContext,
    overrides: &Overrides,
    show_progress: bool,
    out: &mut impl Write,
) -> Result<CheckReport> {
    let config = overrides.apply(&ctx.config)?;
    let scanner = LineScanner::from_config(&config.scan)?;

    if show_progress {
        output::render_summary(
            out,
            &config.manifest.path,
            config.files.len(),
            &config.scan.extension,
        )?;
    }

    let text = read_manifest(&config.manifest.path, config.manifest.mmap_threshold)?;
    output::verbose(&format!("Read {} lines", text.lines().count()));

    let report = check_text(
        &text,
        &scanner,
        &config.files,
        config.manifest.slack_tolerance,
    );
    output::render_report(out, &report, &config.project)?;

    Ok(report)
}
