//! Branch command.

use std::path::Path;

use anyhow::{Result, bail};
use clap::Args;

use super::load_settings;

/// Arguments for the branch command.
#[derive(Debug, Args)]
pub struct BranchArgs {
    /// Branch name, e.g. `feature/add-login`
    pub name: String,
}

/// Runs the branch command.
pub fn run(args: &BranchArgs, config: Option<&Path>) -> Result<()> {
    let settings = load_settings(config)?;

    match settings.branches.validate(&args.name) {
        Ok(branch) => {
            println!("category: {}", branch.category());
            println!("slug: {}", branch.slug());
            Ok(())
        }
        Err(error) => bail!("invalid branch name `{}`: {}", error.name(), error.reason()),
    }
}
