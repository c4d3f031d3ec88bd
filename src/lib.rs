#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # pbxsync - Xcode Project Manifest Sync Checker
//!
//! pbxsync answers one question: does an Xcode project manifest
//! (`project.pbxproj`) already reference a known set of source files? If it
//! does, it says so. If it does not, it prints the manual steps an operator
//! follows in Xcode to add them. The manifest is only ever read.
//!
//! ## Architecture
//!
//! - [`manifest`]: reads the manifest text (the only I/O on the check path)
//! - [`scanner`]: the reference-line heuristic and source directory discovery
//! - [`check`]: pure verdict computation from manifest text
//! - [`config`]: configuration loading and validation
//! - [`output`]: rendering of reports and instructions
//! - [`commands`]: command implementations (`check`, `list`, `config`)
//!
//! ## Example Usage
//!
//! ```no_run
//! use pbxsync::SyncContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = SyncContext::new()?;
//! let verdict = pbxsync::commands::check::execute(&ctx, &Default::default())?;
//! println!("{verdict:?}");
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Command implementations.
pub mod commands;

/// Verdict computation.
pub mod check;

/// Configuration parsing, validation, and defaults.
pub mod config;

/// Manifest reading.
pub mod manifest;

/// Output formatting and message rendering.
pub mod output;

/// Manifest reference scanning and source file discovery.
pub mod scanner;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the pbxsync binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "PBXSYNC_CONFIG";

/// Default configuration file path relative to the user's config directory.
pub const DEFAULT_CONFIG_PATH: &str = "pbxsync/config.toml";

/// Exit status when the manifest is in sync.
pub const EXIT_SYNCED: i32 = 0;

/// Exit status for any error (unreadable manifest, bad config).
pub const EXIT_ERROR: i32 = 1;

/// Exit status when manual action is required.
pub const EXIT_ACTION_REQUIRED: i32 = 2;

/// Central context for pbxsync operations.
///
/// Holds the location the configuration was loaded from and the loaded
/// configuration itself. Commands take a context instead of reaching for
/// globals, so tests can run them against any manifest.
///
/// # Examples
///
/// ```no_run
/// use pbxsync::{SyncContext, config::Config};
///
/// # fn main() -> anyhow::Result<()> {
/// // Context from the default config location
/// let ctx = SyncContext::new()?;
///
/// // Context from an in-memory configuration (for testing)
/// let ctx = SyncContext::from_config(Config::default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Path the configuration was loaded from (it may not exist).
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl SyncContext {
    /// Creates a context by loading the configuration from the default path.
    ///
    /// `PBXSYNC_CONFIG` takes precedence over `<config_dir>/pbxsync/config.toml`.
    ///
    /// # Errors
    /// Returns an error if no config directory can be determined, or if the
    /// configuration file exists but cannot be read or parsed.
    pub fn new() -> Result<Self> {
        let config_path = default_config_path()?;
        Self::new_explicit(config_path)
    }

    /// Creates a context from an explicit configuration file path.
    ///
    /// A missing file yields the built-in defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn new_explicit(config_path: PathBuf) -> Result<Self> {
        let config = config::Config::load(&config_path)?;

        let validator = config::validator::ConfigValidator::new();
        if let Err(e) = validator.validate_config_file(&config_path) {
            output::warning(&format!("Warning: Configuration validation failed: {e}"));
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Creates a context around an already built configuration.
    #[must_use]
    pub fn from_config(config: config::Config) -> Self {
        Self {
            config_path: PathBuf::new(),
            config,
        }
    }
}

/// Resolves the configuration file location.
///
/// # Errors
/// Returns an error if `PBXSYNC_CONFIG` is unset and the platform has no
/// config directory.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().context("Could not find config directory")?;
    Ok(base.join(DEFAULT_CONFIG_PATH))
}
