/// `pbxsync check`
pub mod check;
/// `pbxsync config`
pub mod config;
/// `pbxsync list`
pub mod list;

use crate::config::Config;
use crate::scanner::discover_expected_files;
use anyhow::Result;
use std::path::PathBuf;

/// Command-line overrides layered on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Manifest to check instead of `manifest.path`
    pub manifest: Option<PathBuf>,
    /// Replaces `manifest.slack_tolerance`
    pub slack_tolerance: Option<usize>,
    /// Derive the expected list from this directory instead of `[[files]]`
    pub source_dir: Option<PathBuf>,
}

impl Overrides {
    /// Return a copy of `config` with these overrides applied.
    ///
    /// A `source_dir` replaces the expected file list with the sources found
    /// under it and becomes the directory named in the instructions.
    ///
    /// # Errors
    ///
    /// Returns an error if source discovery fails.
    pub fn apply(&self, config: &Config) -> Result<Config> {
        let mut config = config.clone();

        if let Some(path) = &self.manifest {
            config.manifest.path.clone_from(path);
        }

        if let Some(slack) = self.slack_tolerance {
            config.manifest.slack_tolerance = slack;
        }

        if let Some(dir) = &self.source_dir {
            config.files = discover_expected_files(dir, &config.scan.extension)?;
            config.project.source_dir.clone_from(dir);
        }

        Ok(config)
    }
}
