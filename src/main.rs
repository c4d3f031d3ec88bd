use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use pbxsync::cli::{Cli, Commands, TargetArgs};
use pbxsync::output::{self, Verbosity};
use pbxsync::{EXIT_ERROR, EXIT_SYNCED, SyncContext, commands};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            output::error(&format!("{e:#}"));
            process::exit(EXIT_ERROR);
        }
    }
}

/// Dispatch the parsed command and return the process exit code.
fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        output::set_color(false);
    }
    output::set_verbosity(if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    });

    let command = cli.command.unwrap_or(Commands::Check {
        target: TargetArgs::default(),
        exit_zero: false,
    });

    match command {
        Commands::Check { target, exit_zero } => {
            let ctx = load_context(cli.config)?;
            let verdict = commands::check::execute(&ctx, &target.into())?;
            Ok(if exit_zero {
                EXIT_SYNCED
            } else {
                verdict.exit_code()
            })
        }
        Commands::List { target } => {
            let ctx = load_context(cli.config)?;
            commands::list::execute(&ctx, &target.into())?;
            Ok(EXIT_SYNCED)
        }
        Commands::Config { target, path } => {
            let ctx = load_context(cli.config)?;
            commands::config::execute(&ctx, &target.into(), path)?;
            Ok(EXIT_SYNCED)
        }
        Commands::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
            Ok(EXIT_SYNCED)
        }
    }
}

/// Load the config from `--config`, or the default location.
fn load_context(config: Option<PathBuf>) -> Result<SyncContext> {
    let ctx = match config {
        Some(path) => SyncContext::new_explicit(path)?,
        None => SyncContext::new()?,
    };
    output::verbose(&format!("Config: {}", ctx.config_path.display()));
    Ok(ctx)
}

/// Send tracing events to stderr. `--verbose` enables debug events for this
/// crate; otherwise `RUST_LOG` applies, defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pbxsync=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

/// Write completions for `g` to stdout.
fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
