//! Lint command.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use tracing::debug;

use super::load_settings;
use crate::input::{read_input, strip_comments};

/// Arguments for the lint command.
#[derive(Debug, Args)]
pub struct LintArgs {
    /// Commit message file, e.g. `.git/COMMIT_EDITMSG` (default: stdin)
    pub file: Option<PathBuf>,
}

/// Runs the lint command.
pub fn run(args: &LintArgs, config: Option<&Path>) -> Result<()> {
    let settings = load_settings(config)?;
    let message = strip_comments(&read_input(args.file.as_deref())?);

    match settings.parser.parse(&message) {
        Ok(commit) => {
            debug!(impact = %settings.impacts.classify(&commit), "commit message is valid");
            println!("{}", commit.header());
            if commit.is_breaking() {
                let description = commit
                    .breaking_description()
                    .unwrap_or_else(|| commit.description());
                println!("breaking: {description}");
            }
            Ok(())
        }
        Err(error) => bail!(
            "invalid commit message `{}`: {}",
            error.subject(),
            error.reason()
        ),
    }
}
