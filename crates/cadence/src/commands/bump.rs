//! Bump command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use cadence_core::{ReleasePlanner, SemanticVersion};

use super::load_settings;
use crate::input::{read_input, split_messages};

/// Arguments for the bump command.
#[derive(Debug, Args)]
pub struct BumpArgs {
    /// Current version, with or without the tag prefix (e.g. `v1.2.3`)
    #[arg(long)]
    pub current: String,

    /// File of NUL-separated messages from `git log -z --format=%B` (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fail if any message cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Print the full release plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the next version with the tag prefix
    #[arg(long, conflicts_with = "json")]
    pub tag: bool,
}

/// Runs the bump command.
pub fn run(args: &BumpArgs, config: Option<&Path>) -> Result<()> {
    let settings = load_settings(config)?;
    let current = SemanticVersion::from_tag(&args.current, &settings.tag_prefix)
        .with_context(|| format!("invalid current version `{}`", args.current))?;

    let input = read_input(args.input.as_deref())?;
    let messages = split_messages(&input);
    info!(count = messages.len(), "read commit messages");

    let plan = ReleasePlanner::new(&settings).plan(current, messages)?;

    if args.strict && !plan.is_clean() {
        bail!(
            "{} of {} commit messages could not be parsed",
            plan.failures().len(),
            plan.failures().len() + plan.parsed()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else if args.tag {
        println!("{}{}", settings.tag_prefix, plan.next());
    } else {
        println!("{}", plan.next());
    }

    Ok(())
}
