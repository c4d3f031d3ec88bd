//! xtask for pbxsync - build automation and tooling
//!
//! This binary provides development tasks like man page generation.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for pbxsync")]
enum Task {
    /// Generate man pages from clap definitions
    GenerateManPages {
        /// Output directory for man pages (default: ./man)
        #[arg(short, long, default_value = "man")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::GenerateManPages { output } => generate_man_pages(&output),
    }
}

fn generate_man_pages(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let cmd = pbxsync::cli::Cli::command();
    render(&cmd, &output_dir.join("pbxsync.1"))?;

    // One page per subcommand: pbxsync-check.1, pbxsync-list.1, ...
    for subcmd in cmd.get_subcommands() {
        let page = format!("pbxsync-{}.1", subcmd.get_name());
        render(subcmd, &output_dir.join(page))?;
    }

    println!(
        "\nMan pages generated in: {}\n  man {}/pbxsync.1",
        output_dir.display(),
        output_dir.display()
    );
    Ok(())
}

fn render(cmd: &clap::Command, path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create man page: {}", path.display()))?;
    clap_mangen::Man::new(cmd.clone()).render(&mut std::io::BufWriter::new(file))?;
    println!("✓ Generated: {}", path.display());
    Ok(())
}
