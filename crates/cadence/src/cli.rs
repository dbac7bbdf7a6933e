//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Lint conventional commits, compute the next version and group changelogs.
#[derive(Debug, Parser)]
#[command(name = "cadence")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (default: nearest cadence.toml)
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a single commit message (for commit-msg hooks)
    Lint(commands::lint::LintArgs),

    /// Compute the next version from commit messages
    Bump(commands::bump::BumpArgs),

    /// Print the grouped changelog model as JSON
    Changelog(commands::changelog::ChangelogArgs),

    /// Check a branch name
    Branch(commands::branch::BranchArgs),

    /// Write a default configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = self.config.as_deref();
        match self.command {
            Commands::Lint(args) => commands::lint::run(&args, config),
            Commands::Bump(args) => commands::bump::run(&args, config),
            Commands::Changelog(args) => commands::changelog::run(&args, config),
            Commands::Branch(args) => commands::branch::run(&args, config),
            Commands::Init(args) => commands::init::run(&args, config),
        }
    }
}
