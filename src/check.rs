//! Sync verdict computation.
//!
//! Everything here is pure: manifest text and configuration in, a
//! [`CheckReport`] out. Reading the manifest lives in [`crate::manifest`] and
//! rendering in [`crate::output`].

use crate::config::ExpectedFile;
use crate::scanner::ReferenceScanner;
use std::collections::BTreeSet;

/// Outcome of a sync check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Enough references were found; nothing to do.
    Synced,
    /// Too few references; the operator must add the files by hand.
    NotSynced,
}

impl Verdict {
    /// Process exit status for this verdict.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Synced => crate::EXIT_SYNCED,
            Self::NotSynced => crate::EXIT_ACTION_REQUIRED,
        }
    }
}

/// Everything the check learned about one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Final verdict
    pub verdict: Verdict,
    /// Distinct filenames referenced by the manifest
    pub existing: BTreeSet<String>,
    /// Size of the expected file list
    pub expected_count: usize,
    /// Slack subtracted from `expected_count`
    pub slack_tolerance: usize,
    /// Expected files whose name is not among `existing`.
    ///
    /// Informational only: the verdict is decided by counts.
    pub missing: Vec<ExpectedFile>,
}

impl CheckReport {
    /// Minimum number of references for [`Verdict::Synced`].
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.expected_count.saturating_sub(self.slack_tolerance)
    }
}

/// Decide whether `found` references are enough for `expected_count` files.
///
/// The manifest counts as synced when `found >= expected_count - slack`,
/// saturating at zero.
#[must_use]
pub const fn evaluate(found: usize, expected_count: usize, slack_tolerance: usize) -> Verdict {
    if found >= expected_count.saturating_sub(slack_tolerance) {
        Verdict::Synced
    } else {
        Verdict::NotSynced
    }
}

/// Scan `text` and compare it against `expected`.
pub fn check_text(
    text: &str,
    scanner: &dyn ReferenceScanner,
    expected: &[ExpectedFile],
    slack_tolerance: usize,
) -> CheckReport {
    let existing = scanner.scan(text);
    let verdict = evaluate(existing.len(), expected.len(), slack_tolerance);

    let missing = expected
        .iter()
        .filter(|f| !existing.contains(&f.name))
        .cloned()
        .collect();

    tracing::info!(
        found = existing.len(),
        expected = expected.len(),
        slack = slack_tolerance,
        ?verdict,
        "Sync check complete"
    );

    CheckReport {
        verdict,
        existing,
        expected_count: expected.len(),
        slack_tolerance,
        missing,
    }
}
