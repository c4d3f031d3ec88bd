//! Command-line interface definitions for pbxsync.
//!
//! This module contains all CLI argument parsing structures using clap's derive macros.
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::commands::Overrides;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for pbxsync.
#[derive(Parser)]
#[command(
    name = "pbxsync",
    version = crate::VERSION,
    about = "Check that an Xcode project references its source files",
    long_about = "Scans an Xcode project manifest (project.pbxproj) for file references and \
                  prints the steps to add missing sources in Xcode when too few are found"
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `check`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file
    #[arg(short, long, global = true, env = crate::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the verdict
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the manifest already references the expected files
    Check {
        #[command(flatten)]
        target: TargetArgs,

        /// Exit with status 0 even when files must be added manually
        #[arg(long)]
        exit_zero: bool,
    },

    /// List expected files and whether each is referenced
    List {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        target: TargetArgs,

        /// Print only the configuration file location
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options selecting what to check, overriding the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Project manifest (project.pbxproj) to read
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// How many references may be missing before manual action is required
    #[arg(short, long, value_name = "N")]
    pub slack: Option<usize>,

    /// Derive the expected files from the sources in this directory
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,
}

impl From<TargetArgs> for Overrides {
    fn from(args: TargetArgs) -> Self {
        Self {
            manifest: args.manifest,
            slack_tolerance: args.slack,
            source_dir: args.source_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["pbxsync"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_check_overrides() {
        let cli = Cli::try_parse_from([
            "pbxsync",
            "check",
            "--manifest",
            "App.xcodeproj/project.pbxproj",
            "--slack",
            "0",
            "--exit-zero",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Check { target, exit_zero }) => {
                assert!(exit_zero);
                let overrides = Overrides::from(target);
                assert_eq!(overrides.slack_tolerance, Some(0));
                assert_eq!(
                    overrides.manifest,
                    Some(PathBuf::from("App.xcodeproj/project.pbxproj"))
                );
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pbxsync", "-q", "-v", "check"]).is_err());
    }
}
