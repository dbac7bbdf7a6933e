//! Changelog command.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Args;

use cadence_core::{ReleasePlanner, aggregate};

use super::load_settings;
use crate::input::{read_input, split_messages};

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// File of NUL-separated messages from `git log -z --format=%B` (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fail if any message cannot be parsed
    #[arg(long)]
    pub strict: bool,
}

/// Runs the changelog command.
pub fn run(args: &ChangelogArgs, config: Option<&Path>) -> Result<()> {
    let settings = load_settings(config)?;
    let input = read_input(args.input.as_deref())?;

    let (commits, failures) = ReleasePlanner::new(&settings).parse_all(split_messages(&input));
    if args.strict && !failures.is_empty() {
        bail!(
            "{} of {} commit messages could not be parsed",
            failures.len(),
            failures.len() + commits.len()
        );
    }

    let model = aggregate(&commits, &settings.impacts, &settings.changelog);
    println!("{}", serde_json::to_string_pretty(&model)?);

    Ok(())
}
