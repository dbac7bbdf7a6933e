//! Subcommand implementations.

pub mod branch;
pub mod bump;
pub mod changelog;
pub mod init;
pub mod lint;

use std::path::Path;

use anyhow::{Context, Result};
use cadence_config::{load_config, load_or_default};
use cadence_core::Settings;
use tracing::debug;

/// Loads settings from `config_path`, or from the nearest `cadence.toml`.
///
/// Falls back to built-in defaults when no file is found.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let config = match config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => {
            let current_dir =
                std::env::current_dir().context("failed to get current directory")?;
            load_or_default(&current_dir).context("failed to load configuration")?
        }
    };
    debug!(?config, "resolved configuration");

    Settings::from_config(&config).context("invalid configuration")
}
