use crate::check::{CheckReport, Verdict};
use crate::config::{ExpectedFile, ProjectConfig};
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

/// Width of the `=` rules framing the instruction block
const RULE_WIDTH: usize = 50;

/// Progress lines printed before the manifest is read.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_summary(
    w: &mut impl Write,
    manifest_path: &Path,
    expected_count: usize,
    extension: &str,
) -> io::Result<()> {
    writeln!(
        w,
        "{} Checking project manifest: {}",
        "ℹ".blue().bold(),
        manifest_path.display()
    )?;
    writeln!(w, "  {expected_count} .{extension} files expected")
}

/// Reference count and verdict, followed by the manual steps when the
/// manifest is out of sync.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_report(
    w: &mut impl Write,
    report: &CheckReport,
    project: &ProjectConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "  {} referenced files found (at least {} of {} needed)",
        report.existing.len(),
        report.threshold(),
        report.expected_count
    )?;

    match report.verdict {
        Verdict::Synced => {
            writeln!(
                w,
                "{} {}",
                "✓".green().bold(),
                "Files are already in the project".green()
            )?;
            writeln!(w, "  Nothing to add")
        }
        Verdict::NotSynced => {
            if !report.missing.is_empty() {
                let names: Vec<&str> = report.missing.iter().map(|f| f.name.as_str()).collect();
                writeln!(w, "  Not referenced: {}", names.join(", ").dimmed())?;
            }
            writeln!(w)?;
            writeln!(
                w,
                "{} {}",
                "⚠".yellow().bold(),
                "Files must be added to the project manually in Xcode".yellow().bold()
            )?;
            render_instructions(w, project)
        }
    }
}

/// The numbered steps for adding the sources through Xcode.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_instructions(w: &mut impl Write, project: &ProjectConfig) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let name = &project.name;

    writeln!(w)?;
    writeln!(w, "Follow these steps:")?;
    writeln!(w, "{rule}")?;
    writeln!(
        w,
        "1. In Xcode, right-click the '{name}' folder at the top of the project navigator"
    )?;
    writeln!(w, "2. Choose 'Add Files to {name}...'")?;
    writeln!(w, "3. Navigate to:")?;
    writeln!(w, "   {}", project.source_dir.display())?;
    writeln!(w, "4. Select all folders and source files")?;
    writeln!(w, "5. Make sure these are checked:")?;
    writeln!(w, "   [x] Copy items if needed")?;
    writeln!(w, "   [x] Create groups")?;
    writeln!(w, "   [x] {name} target")?;
    writeln!(w, "6. Click Add")?;
    writeln!(w, "{rule}")
}

/// One line per expected file with a present/missing marker.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_listing(
    w: &mut impl Write,
    expected: &[ExpectedFile],
    existing: &BTreeSet<String>,
) -> io::Result<()> {
    let mut present = 0;

    for file in expected {
        let group = if file.group.is_empty() {
            "(root)"
        } else {
            file.group.as_str()
        };

        if existing.contains(&file.name) {
            present += 1;
            writeln!(w, "{} {:<48} {}", "✓".green(), file.path, group.dimmed())?;
        } else {
            writeln!(w, "{} {:<48} {}", "✗".red(), file.path, group.dimmed())?;
        }
    }

    writeln!(
        w,
        "\n{present} of {} expected files referenced ({} references in manifest)",
        expected.len(),
        existing.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_expected_files;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn report(verdict: Verdict, existing: &[&str]) -> CheckReport {
        let existing: BTreeSet<String> = existing.iter().map(|s| (*s).to_string()).collect();
        let missing = default_expected_files()
            .into_iter()
            .filter(|f| !existing.contains(&f.name))
            .collect();
        CheckReport {
            verdict,
            existing,
            expected_count: 10,
            slack_tolerance: 2,
            missing,
        }
    }

    #[test]
    fn test_synced_report_has_no_instructions() {
        let out = render(|w| {
            render_report(w, &report(Verdict::Synced, &["A.swift"]), &ProjectConfig::default())
        });
        assert!(out.contains("already in the project"));
        assert!(!out.contains("Add Files to"));
    }

    #[test]
    fn test_not_synced_report_has_instructions() {
        let out = render(|w| {
            render_report(w, &report(Verdict::NotSynced, &["Message.swift"]), &ProjectConfig::default())
        });
        assert!(out.contains("Add Files to InfoDigest..."));
        assert!(out.contains("Copy items if needed"));
        assert!(out.contains("ContentView.swift"));
        assert!(!out.contains("already in the project"));
    }

    #[test]
    fn test_instructions_use_project_settings() {
        let project = ProjectConfig {
            name: "Notes".to_string(),
            source_dir: "/src/Notes/Notes".into(),
        };
        let out = render(|w| render_instructions(w, &project));
        assert!(out.contains("'Notes' folder"));
        assert!(out.contains("/src/Notes/Notes"));
        assert!(out.contains("Notes target"));
        assert_eq!(out.matches(&"=".repeat(RULE_WIDTH)).count(), 2);
    }

    #[test]
    fn test_listing_counts_present_files() {
        let existing: BTreeSet<String> = ["Message.swift", "Other.swift"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let out = render(|w| render_listing(w, &default_expected_files(), &existing));
        assert!(out.contains("1 of 10 expected files referenced (2 references in manifest)"));
        assert!(out.contains("Models/Message.swift"));
        assert!(out.contains("(root)"));
    }
}
