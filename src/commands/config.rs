use super::Overrides;
use crate::SyncContext;
use anyhow::Result;
use colored::Colorize;

/// Show the effective configuration
///
/// With `path_only`, print where the configuration is read from and whether
/// that file exists. Otherwise print the configuration, with overrides
/// applied, as TOML.
///
/// # Errors
///
/// Returns an error if overrides cannot be applied or serialization fails
pub fn execute(ctx: &SyncContext, overrides: &Overrides, path_only: bool) -> Result<()> {
    if path_only {
        let state = if ctx.config_path.exists() {
            "".normal()
        } else {
            " (not found, using defaults)".dimmed()
        };
        println!("{}{state}", ctx.config_path.display());
        return Ok(());
    }

    let config = overrides.apply(&ctx.config)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
