//! Configuration management for Cadence.
//!
//! This crate handles loading and writing the `cadence.toml` configuration
//! file. It only describes data; turning it into parser and policy values is
//! done by `cadence-core`.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, find_config_from,
    load_config, load_or_default, write_config,
};
pub use schema::{BranchConfig, ChangelogConfig, Config, VersionConfig};
