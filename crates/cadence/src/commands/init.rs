//! Initialize command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cadence_config::{CONFIG_FILE_NAME, Config, write_config};

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
///
/// Writes to `--config` when given, else `cadence.toml` in the current directory.
pub fn run(args: &InitArgs, config: Option<&Path>) -> Result<()> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .context("failed to get current directory")?
            .join(CONFIG_FILE_NAME),
    };

    write_config(&path, &Config::default(), args.force)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(?path, "wrote configuration");
    println!("Created {}", path.display());

    Ok(())
}
