/// Unknown-key warnings for config files.
pub mod validator;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manifest of the project this tool was first written for.
const DEFAULT_MANIFEST_PATH: &str =
    "/Users/huiminzhang/Bspace/project/1_iphone_app/InfoDigest/InfoDigest.xcodeproj/project.pbxproj";

/// Directory operators add files from when the manifest is out of sync.
const DEFAULT_SOURCE_DIR: &str = "/Users/huiminzhang/Bspace/project/1_iphone_app/InfoDigest/InfoDigest/";

/// Effective configuration of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the manifest lives and how lenient the check is
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// What counts as a file-reference line
    #[serde(default)]
    pub scan: ScanConfig,

    /// Inputs to the manual instruction block
    #[serde(default)]
    pub project: ProjectConfig,

    /// Files the manifest is expected to reference, in display order
    #[serde(default = "default_expected_files")]
    pub files: Vec<ExpectedFile>,
}

/// The `[manifest]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Path to `project.pbxproj`
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
    /// How many expected files may go undetected and still count as synced
    #[serde(default = "default_slack_tolerance")]
    pub slack_tolerance: usize,
    /// Manifests of at least this many bytes are memory-mapped
    #[serde(default = "default_mmap_threshold")]
    pub mmap_threshold: u64,
}

/// The `[scan]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Substring marking a file-reference declaration
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Source extension without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project and target name shown in the instructions
    #[serde(default = "default_project_name")]
    pub name: String,
    /// Directory the operator adds files from
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
}

/// A source file the manifest should reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedFile {
    /// Path relative to the project source directory
    pub path: String,
    /// Xcode group (folder) the file lives in; empty for the root group
    #[serde(default)]
    pub group: String,
    /// Bare file name, as it appears in the manifest
    pub name: String,
}

impl ExpectedFile {
    /// Build an entry from its relative path, group and bare name.
    pub fn new(path: impl Into<String>, group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            group: group.into(),
            name: name.into(),
        }
    }
}

/// `manifest.path` default.
fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

/// `manifest.slack_tolerance` default.
const fn default_slack_tolerance() -> usize {
    2
}

/// `manifest.mmap_threshold` default.
const fn default_mmap_threshold() -> u64 {
    1_048_576 // 1MB
}

/// `scan.marker` default.
fn default_marker() -> String {
    "PBXFileReference".to_string()
}

/// `scan.extension` default.
fn default_extension() -> String {
    "swift".to_string()
}

/// `project.name` default.
fn default_project_name() -> String {
    "InfoDigest".to_string()
}

/// `project.source_dir` default.
fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

/// The file list of the InfoDigest app.
#[must_use]
pub fn default_expected_files() -> Vec<ExpectedFile> {
    [
        ("Models/Message.swift", "Models", "Message.swift"),
        ("Views/MessageDetailView.swift", "Views", "MessageDetailView.swift"),
        ("Views/MessageListView.swift", "Views", "MessageListView.swift"),
        ("Views/SettingsView.swift", "Views", "SettingsView.swift"),
        (
            "ViewModels/MessageListViewModel.swift",
            "ViewModels",
            "MessageListViewModel.swift",
        ),
        ("Services/APIService.swift", "Services", "APIService.swift"),
        (
            "Services/PushNotificationManager.swift",
            "Services",
            "PushNotificationManager.swift",
        ),
        ("AppDelegate.swift", "", "AppDelegate.swift"),
        ("InfoDigestApp.swift", "", "InfoDigestApp.swift"),
        ("ContentView.swift", "", "ContentView.swift"),
    ]
    .into_iter()
    .map(|(path, group, name)| ExpectedFile::new(path, group, name))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: ManifestConfig::default(),
            scan: ScanConfig::default(),
            project: ProjectConfig::default(),
            files: default_expected_files(),
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
            slack_tolerance: default_slack_tolerance(),
            mmap_threshold: default_mmap_threshold(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            extension: default_extension(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            source_dir: default_source_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// A missing file is not an error: the built-in defaults are returned and
    /// nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML or invalid values.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns an error if TOML serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the checker cannot work with
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.scan.extension.trim().is_empty() {
            anyhow::bail!("scan.extension must not be empty");
        }

        if self.scan.extension.starts_with('.') {
            anyhow::bail!(
                "scan.extension must not start with '.' (got {:?})",
                self.scan.extension
            );
        }

        if self.scan.marker.is_empty() {
            anyhow::bail!("scan.marker must not be empty");
        }

        if let Some(file) = self.files.iter().find(|f| f.name.is_empty()) {
            anyhow::bail!("Expected file '{}' has an empty name", file.path);
        }

        Ok(())
    }

    /// Number of references below which the manifest counts as out of sync
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.files.len().saturating_sub(self.manifest.slack_tolerance)
    }
}
